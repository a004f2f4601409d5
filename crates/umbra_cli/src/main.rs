//! umbra - render an OBJ mesh with direct sunlight and hard shadows.
//!
//! Run with: cargo run --release -- assets/pyramid.obj -c assets/scene.toml -o out.png

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use umbra_core::{load_obj, Scene, SceneSettings};
use umbra_renderer::{render, save, ImageFormat, RenderConfig, DEFAULT_BUCKET_SIZE};

#[derive(Parser, Debug)]
#[command(name = "umbra", version, about = "Triangle-mesh ray tracer with hard shadows")]
struct Args {
    /// OBJ mesh to render
    mesh: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// TOML file with camera, sunlight and palette settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels (overrides the config file)
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels (overrides the config file)
    #[arg(long)]
    height: Option<u32>,

    /// View-plane pixel edge length (overrides the config file)
    #[arg(long)]
    pixel_size: Option<f64>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Render bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Output format (defaults to the output file extension)
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Plain-text PPM (P3)
    Ppm,
    /// Binary PPM (P6)
    PpmBinary,
    Png,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ppm => ImageFormat::Ppm,
            Format::PpmBinary => ImageFormat::PpmBinary,
            Format::Png => ImageFormat::Png,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = load_settings(&args)?;

    let start = Instant::now();
    let mesh = load_obj(&args.mesh)
        .with_context(|| format!("Failed to load mesh {}", args.mesh.display()))?;
    let scene = Scene::new(settings.camera()?, mesh.triangles(), settings.sunlight()?)
        .with_context(|| format!("Invalid geometry in {}", args.mesh.display()))?;
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        palette: settings.palette(),
        bucket_size: args.bucket_size,
        threads: args.threads,
    };
    let frame = render(&scene, &config);

    let format = args
        .format
        .map(ImageFormat::from)
        .unwrap_or_else(|| ImageFormat::from_path(&args.output));
    save(&frame, &args.output, format)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

/// Settings from the config file (if any), then command-line overrides.
fn load_settings(args: &Args) -> Result<SceneSettings> {
    let mut settings = match &args.config {
        Some(path) => read_settings(path)?,
        None => SceneSettings::default(),
    };

    let camera = &mut settings.camera;
    if args.width.is_some() {
        camera.width = args.width;
    }
    if args.height.is_some() {
        camera.height = args.height;
    }
    if args.pixel_size.is_some() {
        camera.pixel_size = args.pixel_size;
    }

    Ok(settings)
}

fn read_settings(path: &Path) -> Result<SceneSettings> {
    SceneSettings::load(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "umbra",
            "mesh.obj",
            "--width",
            "32",
            "--pixel-size",
            "0.01",
            "--format",
            "ppm-binary",
        ]);
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert_eq!(args.bucket_size, DEFAULT_BUCKET_SIZE);

        let settings = load_settings(&args).unwrap();
        let camera = settings.camera().unwrap();
        assert_eq!(camera.width(), 32);
        assert_eq!(camera.height(), 480);
        assert_eq!(camera.view_plane.pixel_size, 0.01);
        assert_eq!(ImageFormat::from(args.format.unwrap()), ImageFormat::PpmBinary);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let args = Args::parse_from(["umbra", "mesh.obj", "--config", "/nonexistent/umbra.toml"]);
        let err = load_settings(&args).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/umbra.toml"));
    }
}
