//! Lambertian shading with hard shadows.

use umbra_core::{Color, Hit, Palette, Scene};
use umbra_math::{Ray, Vector};

/// Color for the result of a camera ray.
///
/// A miss shows the background; a hit is lit directly by the sunlight.
pub fn shade(scene: &Scene, hit: Option<Hit>, palette: &Palette) -> Color {
    match hit {
        Some(hit) => direct_light(scene, hit, palette),
        None => palette.background,
    }
}

/// Cast a shadow ray from the hit toward the sunlight and shade the point.
///
/// The hit triangle itself is excluded from the occlusion test. Any other
/// triangle ahead of the point puts it in shadow.
pub fn direct_light(scene: &Scene, hit: Hit, palette: &Palette) -> Color {
    let sunlight = scene.sunlight();
    let shadow_ray = Ray::new(hit.point, sunlight.angle());

    if scene.occluded(&shadow_ray, hit.index) {
        return palette.shadow;
    }

    let normal = scene.planes()[hit.index].normal();
    sunlight.color().scale(brightness(normal, sunlight.angle()))
}

/// Lambert cosine term, clamped to [0, 1].
///
/// Surfaces facing away from the light get 0, never a negative value.
#[inline]
pub fn brightness(normal: Vector, light: Vector) -> f64 {
    normal.dot(light).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::{Camera, Sunlight, Triangle};

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(brightness(Vector::Z, Vector::Z), 1.0);
        assert_eq!(brightness(Vector::Z, -Vector::Z), 0.0);
        assert_eq!(brightness(Vector::Z, Vector::X), 0.0);
        assert!((brightness(Vector::Z, Vector::new(0.0, 0.6, 0.8)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_miss_is_background() {
        let scene = Scene::new(Camera::default(), Vec::new(), Sunlight::default()).unwrap();
        let palette = Palette {
            background: Color::new(1, 2, 3),
            shadow: Color::new(9, 9, 9),
        };
        assert_eq!(shade(&scene, None, &palette), Color::new(1, 2, 3));
    }

    #[test]
    fn test_back_facing_surface_is_dark() {
        let triangle = Triangle::new(
            Vector::new(-1.0, -1.0, 5.0),
            Vector::new(1.0, -1.0, 5.0),
            Vector::new(0.0, 1.0, 5.0),
        );
        // Normal is +Z, light comes from -Z
        let sunlight = Sunlight::new(-Vector::Z, Color::WHITE).unwrap();
        let scene = Scene::new(Camera::default(), vec![triangle], sunlight).unwrap();
        let hit = scene.closest_hit(&Ray::new(Vector::ZERO, Vector::Z)).unwrap();

        assert_eq!(direct_light(&scene, hit, &Palette::default()), Color::BLACK);
    }

    #[test]
    fn test_blocked_point_gets_shadow_color() {
        let floor = Triangle::new(
            Vector::new(-1.0, -1.0, 5.0),
            Vector::new(1.0, -1.0, 5.0),
            Vector::new(0.0, 1.0, 5.0),
        );
        let blocker = Triangle::new(
            Vector::new(-1.0, -1.0, 7.0),
            Vector::new(1.0, -1.0, 7.0),
            Vector::new(0.0, 1.0, 7.0),
        );
        let sunlight = Sunlight::new(Vector::Z, Color::WHITE).unwrap();
        let scene = Scene::new(Camera::default(), vec![floor, blocker], sunlight).unwrap();
        let palette = Palette::default();

        let hit = Hit {
            index: 0,
            point: Vector::new(0.0, 0.0, 5.0),
        };
        assert_eq!(direct_light(&scene, hit, &palette), palette.shadow);
    }
}
