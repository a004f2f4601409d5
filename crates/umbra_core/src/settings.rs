//! Scene settings loaded from TOML.
//!
//! Every table and key is optional. Missing values keep the defaults of
//! `Camera`, `Sunlight` and `Palette`:
//!
//! ```toml
//! [camera]
//! position = [0.0, 0.0, -10.0]
//! pitch_degrees = 0.0
//! yaw_degrees = 0.0
//! pixel_size = 0.002
//! width = 640
//! height = 480
//!
//! [sunlight]
//! direction = [-1.0, -1.0, -1.0]
//! color = [255, 255, 255]
//!
//! [palette]
//! background = [0, 0, 0]
//! shadow = [20, 20, 20]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use umbra_math::{Angle, MathError, Vector};

use crate::{Camera, Color, Palette, Sunlight};

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid sunlight direction: {0}")]
    Geometry(#[from] MathError),

    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneSettings {
    pub camera: CameraSettings,
    pub sunlight: SunlightSettings,
    pub palette: PaletteSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub position: Option<[f64; 3]>,
    pub pitch_degrees: Option<f64>,
    pub yaw_degrees: Option<f64>,
    pub pixel_size: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SunlightSettings {
    /// From surfaces toward the light; normalized on use
    pub direction: Option<[f64; 3]>,
    pub color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSettings {
    pub background: Option<[u8; 3]>,
    pub shadow: Option<[u8; 3]>,
}

impl SceneSettings {
    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Default camera with the configured overrides applied.
    pub fn camera(&self) -> Result<Camera, SettingsError> {
        let c = &self.camera;
        let mut camera = Camera::default();

        if let Some([x, y, z]) = c.position {
            camera.position = Vector::new(x, y, z);
        }
        if !camera.position.is_finite() {
            return Err(invalid("camera.position", "coordinates must be finite"));
        }
        if let Some(degrees) = c.pitch_degrees {
            camera.pitch = Angle::from_degrees(degrees);
        }
        if let Some(degrees) = c.yaw_degrees {
            camera.yaw = Angle::from_degrees(degrees);
        }
        if let Some(pixel_size) = c.pixel_size {
            if !(pixel_size.is_finite() && pixel_size > 0.0) {
                return Err(invalid("camera.pixel_size", "must be positive"));
            }
            camera.view_plane.pixel_size = pixel_size;
        }
        if let Some(width) = c.width {
            camera.view_plane.width = width;
        }
        if let Some(height) = c.height {
            camera.view_plane.height = height;
        }
        if camera.width() == 0 || camera.height() == 0 {
            return Err(invalid("camera.width/height", "resolution must be non-zero"));
        }

        Ok(camera)
    }

    /// Default sunlight with the configured overrides applied.
    pub fn sunlight(&self) -> Result<Sunlight, SettingsError> {
        let default = Sunlight::default();
        let color = self.sunlight.color.map_or(default.color(), Color::from);
        match self.sunlight.direction {
            Some([x, y, z]) => Ok(Sunlight::new(Vector::new(x, y, z), color)?),
            None => Ok(default.with_color(color)),
        }
    }

    pub fn palette(&self) -> Palette {
        let default = Palette::default();
        Palette {
            background: self.palette.background.map_or(default.background, Color::from),
            shadow: self.palette.shadow.map_or(default.shadow, Color::from),
        }
    }
}

fn invalid(key: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        key,
        reason: reason.to_string(),
    }
}
