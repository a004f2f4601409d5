use crate::{MathError, Vector, VectorExt};

/// A plane `a·x + b·y + c·z + k = 0` with `(a, b, c)` unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub k: f64,
}

impl Plane {
    /// Build the plane through three points.
    ///
    /// The normal is `(v1 - v2) × (v1 - v3)`, normalized, so the winding of
    /// the points picks its sign. Collinear points have no plane.
    pub fn from_points(v1: Vector, v2: Vector, v3: Vector) -> Result<Self, MathError> {
        let normal = (v1 - v2).cross(v1 - v3).normalized()?;
        Ok(Self {
            a: normal.x,
            b: normal.y,
            c: normal.z,
            k: -normal.dot(v1),
        })
    }

    /// Unit normal `(a, b, c)`.
    #[inline]
    pub fn normal(&self) -> Vector {
        Vector::new(self.a, self.b, self.c)
    }

    /// `a·x + b·y + c·z + k` for the point `p`.
    #[inline]
    pub fn signed_distance(&self, p: Vector) -> f64 {
        self.normal().dot(p) + self.k
    }

    /// Intersect the line `origin + λ·direction` with this plane.
    ///
    /// Returns the point and whether it lies ahead of the origin (`λ > 0`).
    /// A direction parallel to the plane divides by zero: the point is then
    /// non-finite and must be treated as no intersection.
    pub fn intersection(&self, origin: Vector, direction: Vector) -> (Vector, bool) {
        let normal = self.normal();
        let lambda = -(normal.dot(origin) + self.k) / normal.dot(direction);
        (origin + direction * lambda, lambda > 0.0)
    }
}
