//! src/tracer.rs
//! -------------
//! Recursive colour integration: nearest-hit search over all spheres,
//! dispatch by material, direct lighting with shadow tests for diffuse
//! surfaces, bounded recursion for mirrors and glass.

use crate::{
    algebra::Vec3,
    light::{Light, LightKind},
    material::MaterialKind,
    optics::{reflect, refract},
    ray::Ray,
    scene::Scene,
    sphere::{Hit, Sphere, T_MIN},
};

/// Reflection and refraction both count against this. Rays that exceed it
/// return the scene background, which also stops two facing mirrors from
/// recursing forever.
pub const MAX_BOUNCES: u32 = 5;

/// Secondary rays start this far along their own direction so they cannot
/// immediately re-hit the surface they left.
const RAY_OFFSET: f32 = 1e-4;

/// Trace a ray through the scene and return its linear-space colour.
///
/// `bounce` is 0 for primary rays; every recursive path increments it.
/// Components are non-negative and unbounded above; clamping to a
/// displayable range happens at the image-writing boundary.
pub fn trace(ray: Ray, scene: &Scene, bounce: u32) -> Vec3 {
    if bounce > MAX_BOUNCES {
        return scene.background;
    }

    let (sphere, hit) = match intersect_closest(ray, &scene.spheres) {
        Some(found) => found,
        None => return scene.background,
    };

    match sphere.material.kind {
        MaterialKind::Diffuse => shade_diffuse(sphere, &hit, scene),
        MaterialKind::Mirror => {
            let reflected = reflect(ray.direction, hit.normal);
            let origin = hit.point.add(reflected.scale(RAY_OFFSET));
            let bounced = trace(Ray::new(origin, reflected), scene, bounce + 1);
            // tinted mirror
            bounced.mul(sphere.material.color)
        }
        MaterialKind::Refractive => {
            // The eta derivation assumes the sphere sits in air; nested or
            // overlapping glass volumes are unsupported.
            let entering = ray.direction.dot(hit.normal) < 0.0;
            let (eta, normal) = if entering {
                (1.0 / sphere.material.ior, hit.normal)
            } else {
                // leaving: flip the normal so it opposes the incident ray
                (sphere.material.ior, hit.normal.neg())
            };

            let direction = match refract(ray.direction, normal, eta) {
                Ok(transmitted) => transmitted,
                Err(_) => reflect(ray.direction, normal),
            };

            let origin = hit.point.add(direction.scale(RAY_OFFSET));
            let bounced = trace(Ray::new(origin, direction), scene, bounce + 1);
            // tinted glass
            bounced.mul(sphere.material.color)
        }
    }
}

/// Nearest valid hit across every sphere. Equal-t ties keep the first
/// sphere in scene order.
fn intersect_closest(ray: Ray, spheres: &[Sphere]) -> Option<(&Sphere, Hit)> {
    spheres
        .iter()
        .filter_map(|s| s.hit(ray, T_MIN).map(|hit| (s, hit)))
        .min_by(|a, b| a.1.t.total_cmp(&b.1.t))
}

/// Direct lighting for a diffuse surface: sum every light's contribution.
fn shade_diffuse(sphere: &Sphere, hit: &Hit, scene: &Scene) -> Vec3 {
    let albedo = sphere.material.color;
    let mut color = Vec3::ZERO;

    for light in &scene.lights {
        // Ambient light applies everywhere and is never shadowed.
        if light.kind() == LightKind::Ambient {
            color = color.add(albedo.mul(light.intensity()));
            continue;
        }

        let Ok(light_dir) = light.direction(hit.point) else {
            continue; // only ambient lights lack a direction, handled above
        };

        if in_shadow(hit.point, light, &scene.spheres) {
            continue;
        }

        let lambert = light_dir.neg().dot(hit.normal).max(0.0);
        if lambert > 0.0 {
            let reflectance = albedo.scale(lambert);
            color = color.add(reflectance.mul(light.intensity_at(hit.point)));
        }
    }

    color
}

/// Whether any sphere occludes the light from `point`.
///
/// Directional lights are occluded by any hit; point and spot lights only by
/// hits closer than the light itself. Refractive spheres transmit rather
/// than block, so they never cast shadows.
fn in_shadow(point: Vec3, light: &Light, spheres: &[Sphere]) -> bool {
    let Ok(incoming) = light.direction(point) else {
        return false; // ambient: nothing to occlude
    };
    let shadow_ray = Ray::new(point, incoming.neg());

    let limit = match light.location() {
        Ok(location) => location.sub(point).norm(),
        Err(_) => f32::INFINITY, // directional: distance does not matter
    };

    spheres.iter().any(|sphere| {
        sphere.material.kind != MaterialKind::Refractive
            && sphere
                .hit(shadow_ray, T_MIN)
                .map_or(false, |hit| hit.t < limit)
    })
}
