//! src/camera.rs
//! -------------
//! Pinhole camera: builds an orthonormal basis from position/look-at/up and
//! maps pixel coordinates to primary rays. One ray per pixel, through the
//! pixel centre.

use crate::{algebra::Vec3, ray::Ray, scene::CameraConfig};

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    scale: f32,
    aspect: f32,
    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let forward = config.look_at.sub(config.pos).normalize();
        let right = config.up.cross(forward).normalize();
        let up = forward.cross(right).normalize();

        Self {
            position: config.pos,
            right,
            up,
            forward,
            scale: (config.fov.to_radians() * 0.5).tan(),
            aspect: width as f32 / height as f32,
            width,
            height,
        }
    }

    /// Primary ray through the centre of pixel (x, y). Direction is unit.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let u = ((x as f32 + 0.5) / self.width as f32 - 0.5) * 2.0 * self.aspect * self.scale;
        let v = -((y as f32 + 0.5) / self.height as f32 - 0.5) * 2.0 * self.scale;

        let direction = self
            .right
            .scale(u)
            .add(self.up.scale(v))
            .add(self.forward)
            .normalize();
        Ray::new(self.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CameraConfig {
        CameraConfig {
            pos: Vec3::ZERO,
            look_at: Vec3(0.0, 0.0, 1.0),
            up: Vec3(0.0, 1.0, 0.0),
            fov: 90.0,
        }
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        // Odd dimensions put a pixel centre exactly on the optical axis.
        let camera = Camera::new(&test_config(), 101, 101);
        let ray = camera.primary_ray(50, 50);
        assert!(ray.direction.sub(Vec3(0.0, 0.0, 1.0)).norm() < 1e-4);
        assert!(ray.origin.norm() < 1e-6);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let camera = Camera::new(&test_config(), 64, 48);
        for &(x, y) in &[(0, 0), (63, 0), (0, 47), (63, 47), (31, 23)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_image_y_grows_downward() {
        let camera = Camera::new(&test_config(), 64, 64);
        let top = camera.primary_ray(32, 0);
        let bottom = camera.primary_ray(32, 63);
        assert!(top.direction.1 > 0.0);
        assert!(bottom.direction.1 < 0.0);
    }
}
