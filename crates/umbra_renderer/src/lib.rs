//! Umbra Renderer - direct lighting with hard shadows.
//!
//! One camera ray per pixel, one shadow ray per hit, Lambertian shading
//! from a single sunlight. Every ray is tested against every triangle;
//! the pixel grid is split into buckets rendered in parallel.

mod bucket;
mod output;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use output::{save, save_png, write_ppm, write_ppm_binary, ImageFormat, OutputError};
pub use renderer::{render, render_pixel, Frame, RenderConfig};
pub use shading::{brightness, direct_light, shade};

/// Re-export the scene types the renderer consumes
pub use umbra_core::{Color, Palette, Scene};
