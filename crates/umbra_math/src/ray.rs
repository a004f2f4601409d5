use crate::Vector;

/// A half-line `origin + λ·direction` for `λ > 0`.
///
/// The direction is not required to be unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter `lambda`.
    pub fn at(&self, lambda: f64) -> Vector {
        self.origin + self.direction * lambda
    }
}
