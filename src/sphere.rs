//! src/sphere.rs
//! -------------
//! Sphere primitive and the analytic ray intersector.

use crate::{algebra::Vec3, material::Material, ray::Ray};

/// Default lower bound on the ray parameter. Hits at or below this are
/// rejected so a ray never re-intersects the surface it started on.
pub const T_MIN: f32 = 1e-3;

/// Transient intersection record, valid for one trace call.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    /// Outward unit normal at `point`, regardless of which side the ray
    /// came from. Refraction on exit flips it explicitly.
    pub normal: Vec3,
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub name: String,
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Intersect a ray (ro + t·rd). Returns the closest hit with
    /// `t > min_t`, or `None`.
    pub fn hit(&self, ray: Ray, min_t: f32) -> Option<Hit> {
        // Analytic quadratic
        let oc   = ray.origin.sub(self.center);
        let a    = ray.direction.dot(ray.direction);
        let b    = 2.0 * oc.dot(ray.direction);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*a*c;
        if disc < 0.0 { return None; }

        // Near root first; fall back to the far root so a ray that starts
        // inside the sphere still finds its exit point.
        let sqrt_d = disc.sqrt();
        let mut t = (-b - sqrt_d) / (2.0 * a);
        if t <= min_t {
            t = (-b + sqrt_d) / (2.0 * a);
            if t <= min_t { return None; }
        }

        let point = ray.at(t);
        Some(Hit { t, point, normal: self.normal_at(point) })
    }

    /// Outward unit normal, assuming `point` lies on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point.sub(self.center).scale(1.0 / self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialKind;

    fn unit_material() -> Material {
        Material { kind: MaterialKind::Diffuse, color: Vec3(1.0, 1.0, 1.0), ior: 1.0 }
    }

    fn sphere_at_origin(radius: f32) -> Sphere {
        Sphere {
            name: "test".into(),
            center: Vec3::ZERO,
            radius,
            material: unit_material(),
        }
    }

    #[test]
    fn test_head_on_hit_distance_and_normal() {
        let sphere = sphere_at_origin(2.0);
        let ray = Ray::new(Vec3(0.0, 0.0, -10.0), Vec3(0.0, 0.0, 1.0));

        let hit = sphere.hit(ray, T_MIN).expect("ray aimed at sphere");
        assert!((hit.t - 8.0).abs() < 1e-4);
        // normal = hit point / radius
        let expected = hit.point.scale(1.0 / 2.0);
        assert!(hit.normal.sub(expected).norm() < 1e-5);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_perpendicular_miss() {
        let sphere = sphere_at_origin(2.0);
        // Passes 3 units above the centre, radius is 2.
        let ray = Ray::new(Vec3(0.0, 3.0, -10.0), Vec3(0.0, 0.0, 1.0));
        assert!(sphere.hit(ray, T_MIN).is_none());
    }

    #[test]
    fn test_origin_on_surface_does_not_self_intersect() {
        let sphere = sphere_at_origin(2.0);

        // Pointing away: the only roots are t = 0 and t < 0.
        let away = Ray::new(Vec3(0.0, 0.0, -2.0), Vec3(0.0, 0.0, -1.0));
        assert!(sphere.hit(away, T_MIN).is_none());

        // Pointing through: t = 0 is rejected, the far side at t = 4 wins.
        let through = Ray::new(Vec3(0.0, 0.0, -2.0), Vec3(0.0, 0.0, 1.0));
        let hit = sphere.hit(through, T_MIN).expect("exit point");
        assert!((hit.t - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_inside_origin_finds_exit() {
        let sphere = sphere_at_origin(2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3(1.0, 0.0, 0.0));
        let hit = sphere.hit(ray, T_MIN).expect("exit point");
        assert!((hit.t - 2.0).abs() < 1e-4);
    }
}
