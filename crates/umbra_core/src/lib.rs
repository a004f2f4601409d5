//! Umbra Core - scene description for the umbra ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Sunlight`, `Triangle`, `Color`
//! - **Intersection search**: closest-hit and occlusion queries on `Scene`
//! - **Mesh loading**: a strict OBJ subset (`v` and triangular `f` records)
//! - **Settings**: TOML overrides for the camera, light and palette defaults
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::{load_obj, Scene, SceneSettings};
//!
//! let mesh = load_obj("teapot.obj")?;
//! let settings = SceneSettings::default();
//! let scene = Scene::new(settings.camera()?, mesh.triangles(), settings.sunlight()?)?;
//! let hit = scene.closest_hit(&scene.camera().ray(320, 240));
//! ```

pub mod camera;
pub mod color;
pub mod intersect;
pub mod light;
pub mod mesh;
pub mod obj;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use camera::{Camera, ViewPlane};
pub use color::{Color, Palette};
pub use intersect::Hit;
pub use light::Sunlight;
pub use mesh::{Mesh, MeshError, Triangle};
pub use obj::{load_obj, parse_obj};
pub use scene::{Scene, SceneError};
pub use settings::{SceneSettings, SettingsError};
