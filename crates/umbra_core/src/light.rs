use umbra_math::{MathError, Vector, VectorExt};

use crate::Color;

/// A directional light at infinity.
///
/// `angle` points from lit surfaces toward the light; light travels along
/// its negation. It is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sunlight {
    angle: Vector,
    color: Color,
}

impl Sunlight {
    pub const DEFAULT_DIRECTION: Vector = Vector::new(-1.0, -1.0, -1.0);

    /// Create a light shining from `direction`, which is normalized here.
    pub fn new(direction: Vector, color: Color) -> Result<Self, MathError> {
        Ok(Self {
            angle: direction.normalized()?,
            color,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn angle(&self) -> Vector {
        self.angle
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for Sunlight {
    fn default() -> Self {
        Self {
            angle: Self::DEFAULT_DIRECTION / Self::DEFAULT_DIRECTION.length(),
            color: Color::WHITE,
        }
    }
}
