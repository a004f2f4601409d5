//! Frame driver.
//!
//! Generates one camera ray per view-plane pixel, resolves the closest hit
//! and shades it, producing a row-major frame of colors.

use std::time::Instant;

use rayon::prelude::*;
use umbra_core::{Color, Palette, Scene};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::shading::shade;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background and shadow colors
    pub palette: Palette,
    /// Edge length of the square render buckets, in pixels
    pub bucket_size: u32,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

/// Rendered pixels, row-major: pixel `(i, j)` is at `j * width + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    /// Create a new frame filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Raw RGB bytes, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered bucket into its slot.
    fn blit(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.offset(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }
}

/// Render a single pixel: camera ray, closest hit, shading.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, palette: &Palette) -> Color {
    let ray = scene.camera().ray(x, y);
    shade(scene, scene.closest_hit(&ray), palette)
}

/// Render the entire scene.
///
/// Buckets are rendered in parallel and gathered into the frame by pixel
/// position, so the output does not depend on bucket size or thread count.
pub fn render(scene: &Scene, config: &RenderConfig) -> Frame {
    let pool = config.threads.and_then(|threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| log::warn!("Falling back to the global thread pool: {}", e))
            .ok()
    });

    match pool {
        Some(pool) => pool.install(|| render_buckets(scene, config)),
        None => render_buckets(scene, config),
    }
}

fn render_buckets(scene: &Scene, config: &RenderConfig) -> Frame {
    let camera = scene.camera();
    let (width, height) = (camera.width(), camera.height());
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::info!(
        "Rendering {}x{} ({} triangles) in {} buckets on {} threads",
        width,
        height,
        scene.triangle_count(),
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, scene, &config.palette);
            log::debug!("Bucket {} done ({} hits)", bucket.index, result.hits);
            result
        })
        .collect();

    let mut frame = Frame::new(width, height);
    let mut hits = 0;
    for result in &results {
        frame.blit(result);
        hits += result.hits;
    }

    log::info!(
        "Rendered {} pixels ({} hits) in {:?}",
        frame.pixels.len(),
        hits,
        start.elapsed()
    );

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::{Camera, Sunlight, Triangle, ViewPlane};
    use umbra_math::{Vector, VectorExt};

    /// The triangle (-1,-1,5), (1,-1,5), (0,1,5) seen through a 3x3 view plane.
    fn single_triangle_scene(sunlight: Sunlight) -> Scene {
        let triangle = Triangle::new(
            Vector::new(-1.0, -1.0, 5.0),
            Vector::new(1.0, -1.0, 5.0),
            Vector::new(0.0, 1.0, 5.0),
        );
        let camera = Camera::new()
            .with_position(Vector::ZERO)
            .with_view_plane(ViewPlane::new(0.5, 3, 3));
        Scene::new(camera, vec![triangle], sunlight).unwrap()
    }

    #[test]
    fn test_single_triangle_end_to_end() {
        let sunlight = Sunlight::new(Vector::Z, Color::WHITE).unwrap();
        let scene = single_triangle_scene(sunlight);
        let config = RenderConfig::default();
        let frame = render(&scene, &config);

        let normal = scene.planes()[0].normal();
        let brightness = normal.dot(sunlight.angle());
        let expected = (255.0 * brightness.clamp(0.0, 1.0)).round() as u8;
        assert_eq!(frame.get(1, 1), Color::new(expected, expected, expected));
        assert_eq!(frame.get(1, 1), Color::WHITE);

        for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
            assert_eq!(frame.get(x, y), config.palette.background);
        }
    }

    #[test]
    fn test_tilted_light_brightness() {
        let direction = Vector::new(0.0, 0.6, 0.8);
        let sunlight = Sunlight::new(direction, Color::new(255, 100, 0)).unwrap();
        let scene = single_triangle_scene(sunlight);
        let frame = render(&scene, &RenderConfig::default());

        // cos = 0.8
        assert_eq!(frame.get(1, 1), Color::new(204, 80, 0));
    }

    #[test]
    fn test_shadow_only_where_blocked() {
        // Wall at z = 10 facing the camera, lit from +x/-z
        let wall = Triangle::new(
            Vector::new(-10.0, -10.0, 10.0),
            Vector::new(0.0, 10.0, 10.0),
            Vector::new(10.0, -10.0, 10.0),
        );
        // Sits on the center pixel's shadow ray, (0,0,10) -> (5,0,5)
        let blocker = Triangle::new(
            Vector::new(4.0, -1.0, 5.0),
            Vector::new(6.0, -1.0, 5.0),
            Vector::new(5.0, 1.0, 5.0),
        );
        let light = Vector::new(1.0, 0.0, -1.0).normalized().unwrap();
        let sunlight = Sunlight::new(light, Color::WHITE).unwrap();
        let camera = Camera::new()
            .with_position(Vector::ZERO)
            .with_view_plane(ViewPlane::new(0.1, 3, 1));
        let scene = Scene::new(camera, vec![wall, blocker], sunlight).unwrap();
        let config = RenderConfig::default();

        let frame = render(&scene, &config);
        let lit = Color::WHITE.scale(std::f64::consts::FRAC_1_SQRT_2);

        assert_eq!(frame.get(0, 0), lit);
        assert_eq!(frame.get(1, 0), config.palette.shadow);
        assert_eq!(frame.get(2, 0), lit);
        assert_eq!(lit, Color::new(180, 180, 180));
    }

    #[test]
    fn test_pixel_order_is_row_major() {
        let frame = {
            let mut frame = Frame::new(4, 3);
            for y in 0..3 {
                for x in 0..4 {
                    frame.set(x, y, Color::new(x as u8, y as u8, 0));
                }
            }
            frame
        };
        assert_eq!(frame.pixels.len(), 12);
        for y in 0..3u32 {
            for x in 0..4u32 {
                let i = (y * 4 + x) as usize;
                assert_eq!(frame.pixels[i], Color::new(x as u8, y as u8, 0));
            }
        }
    }

    #[test]
    fn test_render_matches_render_pixel() {
        let sunlight = Sunlight::new(Vector::new(0.2, -0.3, 1.0), Color::WHITE).unwrap();
        let triangle = Triangle::new(
            Vector::new(-1.0, -1.0, 5.0),
            Vector::new(1.5, -0.5, 6.0),
            Vector::new(0.0, 1.0, 4.0),
        );
        let camera = Camera::new()
            .with_position(Vector::ZERO)
            .with_view_plane(ViewPlane::new(0.04, 13, 9));
        let scene = Scene::new(camera, vec![triangle], sunlight).unwrap();
        let config = RenderConfig::default();

        let frame = render(&scene, &config);
        assert_eq!(frame.pixels.len(), 13 * 9);
        for y in 0..9 {
            for x in 0..13 {
                assert_eq!(
                    frame.pixels[(y * 13 + x) as usize],
                    render_pixel(&scene, x, y, &config.palette)
                );
            }
        }
    }

    #[test]
    fn test_output_independent_of_partitioning() {
        let sunlight = Sunlight::new(Vector::new(-0.5, -1.0, -1.0), Color::WHITE).unwrap();
        let triangles = vec![
            Triangle::new(
                Vector::new(-3.0, 2.0, 8.0),
                Vector::new(0.0, -3.0, 8.0),
                Vector::new(3.0, 2.0, 8.0),
            ),
            Triangle::new(
                Vector::new(-1.0, 0.5, 6.0),
                Vector::new(0.0, -1.0, 6.0),
                Vector::new(1.0, 0.5, 6.0),
            ),
        ];
        let camera = Camera::new()
            .with_position(Vector::ZERO)
            .with_view_plane(ViewPlane::new(0.02, 37, 23));
        let scene = Scene::new(camera, triangles, sunlight).unwrap();

        let reference = render(
            &scene,
            &RenderConfig {
                bucket_size: 1024,
                threads: Some(1),
                ..RenderConfig::default()
            },
        );
        for (bucket_size, threads) in [(1, Some(4)), (5, None), (16, Some(3))] {
            let frame = render(
                &scene,
                &RenderConfig {
                    bucket_size,
                    threads,
                    ..RenderConfig::default()
                },
            );
            assert_eq!(frame, reference);
        }
    }

    #[test]
    fn test_frame_bytes() {
        let mut frame = Frame::new(2, 1);
        frame.set(1, 0, Color::new(7, 8, 9));
        assert_eq!(frame.as_bytes(), &[0, 0, 0, 7, 8, 9]);
    }
}
