// Re-export glam for convenience
pub use glam::*;

// Umbra math types
mod angle;
mod plane;
mod ray;
mod vector;

pub use angle::Angle;
pub use plane::Plane;
pub use ray::Ray;
pub use vector::{same_side, VectorExt};

use thiserror::Error;

/// Positions and directions share one type.
pub type Vector = DVec3;

/// Errors raised by geometric operations with no defined result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a vector with zero or non-finite magnitude")]
    DivisionDegenerate,
}
