//! Camera and view plane.

use umbra_math::{Angle, Ray, Vector, VectorExt};

/// Discretized image plane, one unit in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    /// Edge length of one pixel, in scene units
    pub pixel_size: f64,
    /// Pixel count across
    pub width: u32,
    /// Pixel count down
    pub height: u32,
}

impl ViewPlane {
    pub const DEFAULT_PIXEL_SIZE: f64 = 0.002;
    pub const DEFAULT_WIDTH: u32 = 640;
    pub const DEFAULT_HEIGHT: u32 = 480;

    pub fn new(pixel_size: f64, width: u32, height: u32) -> Self {
        Self {
            pixel_size,
            width,
            height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Index of the center pixel on each axis. Even counts round down.
    pub fn center(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(1) / 2,
            self.height.saturating_sub(1) / 2,
        )
    }

    /// Camera-local direction through pixel `(i, j)`, before rotation.
    ///
    /// Local axes: +X right, +Y down the rows, +Z forward.
    pub fn local_direction(&self, i: u32, j: u32) -> Vector {
        let (ci, cj) = self.center();
        Vector::new(
            self.pixel_size * (i as f64 - ci as f64),
            self.pixel_size * (j as f64 - cj as f64),
            1.0,
        )
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_PIXEL_SIZE,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
        )
    }
}

/// Pinhole camera generating one ray per view-plane pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector,
    pub pitch: Angle,
    pub yaw: Angle,
    pub view_plane: ViewPlane,
}

impl Camera {
    pub const DEFAULT_POSITION: Vector = Vector::new(0.0, 0.0, -10.0);

    /// Create a camera with the default configuration.
    pub fn new() -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            pitch: Angle::ZERO,
            yaw: Angle::ZERO,
            view_plane: ViewPlane::default(),
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    /// Set orientation.
    pub fn with_angles(mut self, pitch: Angle, yaw: Angle) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    pub fn with_view_plane(mut self, view_plane: ViewPlane) -> Self {
        self.view_plane = view_plane;
        self
    }

    /// Set image resolution, keeping the pixel size.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.view_plane.width = width;
        self.view_plane.height = height;
        self
    }

    pub fn width(&self) -> u32 {
        self.view_plane.width
    }

    pub fn height(&self) -> u32 {
        self.view_plane.height
    }

    /// World-space direction through pixel `(i, j)`: yaw first, then pitch.
    pub fn ray_direction(&self, i: u32, j: u32) -> Vector {
        self.view_plane
            .local_direction(i, j)
            .yaw(self.yaw)
            .pitch(self.pitch)
    }

    /// Camera ray for pixel `(i, j)`.
    pub fn ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(self.position, self.ray_direction(i, j))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
