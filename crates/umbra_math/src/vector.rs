// Vector utilities
//
// Extends glam::DVec3 with the camera rotations and a fallible normalization.
// glam already covers add/sub/scale, dot, cross, length and length_squared.

use glam::{DMat3, DVec3};

use crate::{Angle, MathError};

/// Extension trait for DVec3 used by the camera and plane code.
pub trait VectorExt: Sized {
    /// Divide by the magnitude.
    ///
    /// Fails for a zero-length vector, which has no direction.
    fn normalized(self) -> Result<Self, MathError>;

    /// Rotate about the camera's local horizontal (+X) axis.
    fn pitch(self, angle: Angle) -> Self;

    /// Rotate about the camera's local vertical (+Y) axis.
    fn yaw(self, angle: Angle) -> Self;
}

impl VectorExt for DVec3 {
    fn normalized(self) -> Result<Self, MathError> {
        let magnitude = self.length();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(MathError::DivisionDegenerate);
        }
        Ok(self / magnitude)
    }

    fn pitch(self, angle: Angle) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let rotation = DMat3::from_cols(
            DVec3::X,
            DVec3::new(0.0, cos, sin),
            DVec3::new(0.0, -sin, cos),
        );
        rotation * self
    }

    fn yaw(self, angle: Angle) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let rotation = DMat3::from_cols(
            DVec3::new(cos, 0.0, -sin),
            DVec3::Y,
            DVec3::new(sin, 0.0, cos),
        );
        rotation * self
    }
}

/// Same-side test for one triangle edge.
///
/// Returns true when `p` and `reference` lie strictly on the same side of the
/// line through `a` and `b`. A point on the line is never on the same side.
#[inline]
pub fn same_side(p: DVec3, reference: DVec3, a: DVec3, b: DVec3) -> bool {
    let edge = b - a;
    let cp = edge.cross(p - b);
    let cr = edge.cross(reference - b);
    cp.dot(cr) > 0.0
}
