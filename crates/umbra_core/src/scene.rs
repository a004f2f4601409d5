//! The immutable scene rendered by umbra.
//!
//! A `Scene` owns the camera, the sunlight, the triangle list and one
//! plane per triangle. The planes are derived once here and stay
//! index-aligned with the triangles for the lifetime of the scene.

use thiserror::Error;
use umbra_math::Plane;

use crate::{Camera, Sunlight, Triangle};

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("triangle {index} is degenerate (zero area, no plane)")]
    DegenerateTriangle { index: usize },
}

#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    triangles: Vec<Triangle>,
    planes: Vec<Plane>,
    sunlight: Sunlight,
}

impl Scene {
    /// Build a scene, deriving the plane of every triangle.
    ///
    /// Fails on the first zero-area triangle; no partial scene is returned.
    pub fn new(
        camera: Camera,
        triangles: Vec<Triangle>,
        sunlight: Sunlight,
    ) -> Result<Self, SceneError> {
        let planes = triangles
            .iter()
            .enumerate()
            .map(|(index, triangle)| {
                triangle
                    .plane()
                    .map_err(|_| SceneError::DegenerateTriangle { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Scene built with {} triangles", triangles.len());

        Ok(Self {
            camera,
            triangles,
            planes,
            sunlight,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn sunlight(&self) -> &Sunlight {
        &self.sunlight
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Planes, `planes()[i]` belonging to `triangles()[i]`.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
