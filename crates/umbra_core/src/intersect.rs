//! Brute-force ray queries against a `Scene`.
//!
//! Every query scans all triangles: O(n) per ray, no acceleration
//! structure. A triangle is a candidate when its plane is crossed ahead of
//! the ray origin at a finite point that passes the same-side test.

use umbra_math::{Ray, Vector};

use crate::Scene;

/// Nearest surface point along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the triangle (and of its plane) in the scene
    pub index: usize,
    /// Intersection point in world space
    pub point: Vector,
}

impl Scene {
    /// Intersection of `ray` with triangle `index`, if it counts as a hit.
    ///
    /// Points behind the origin, non-finite points from rays parallel to
    /// the plane, and points outside the triangle (or on its edges) are
    /// rejected.
    pub fn candidate(&self, index: usize, ray: &Ray) -> Option<Vector> {
        let (point, forward) = self.planes()[index].intersection(ray.origin, ray.direction);
        if !forward || !point.is_finite() {
            return None;
        }
        self.triangles()[index].contains(point).then_some(point)
    }

    /// Nearest candidate by squared distance from the ray origin.
    ///
    /// Equal distances resolve to the lowest triangle index.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<(f64, Hit)> = None;

        for index in 0..self.triangle_count() {
            let Some(point) = self.candidate(index, ray) else {
                continue;
            };
            let distance = (point - ray.origin).length_squared();
            let nearer = match &closest {
                Some((best, _)) => distance < *best,
                None => true,
            };
            if nearer {
                closest = Some((distance, Hit { index, point }));
            }
        }

        closest.map(|(_, hit)| hit)
    }

    /// Whether any triangle other than `exclude` blocks `ray`.
    ///
    /// Stops at the first candidate found.
    pub fn occluded(&self, ray: &Ray, exclude: usize) -> bool {
        (0..self.triangle_count())
            .filter(|&index| index != exclude)
            .any(|index| self.candidate(index, ray).is_some())
    }
}
