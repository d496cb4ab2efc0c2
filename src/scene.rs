//! src/scene.rs
//! ------------
//! JSON scene description: camera and render blocks, a name-keyed material
//! table, spheres referencing materials by name, and a tagged light list.
//! Also provides the built-in default scene used when no file is given.

use crate::{
    algebra::{vec3_from_array, Vec3},
    light::Light,
    material::{Material, MaterialKind},
    sphere::Sphere,
};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sphere '{sphere}' references unknown material '{material}'")]
    UnknownMaterial { sphere: String, material: String },
    #[error("sphere '{sphere}': {reason}")]
    InvalidSphere { sphere: String, reason: &'static str },
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(deserialize_with = "vec3_from_array")]
    pub pos: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub look_at: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
struct MaterialJson {
    kind: MaterialKind,
    rgb: [f32; 3],
    #[serde(default = "default_ior")]
    ior: f32,
}

fn default_ior() -> f32 {
    1.0
}

#[derive(Deserialize)]
struct SphereJson {
    name: String,
    #[serde(deserialize_with = "vec3_from_array")]
    center: Vec3,
    radius: f32,
    mat: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum LightJson {
    Ambient {
        #[serde(deserialize_with = "vec3_from_array")]
        intensity: Vec3,
    },
    Directional {
        #[serde(deserialize_with = "vec3_from_array")]
        intensity: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        direction: Vec3,
    },
    Point {
        #[serde(deserialize_with = "vec3_from_array")]
        intensity: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        position: Vec3,
    },
    Spot {
        #[serde(deserialize_with = "vec3_from_array")]
        intensity: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        position: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        direction: Vec3,
        /// Cone half-angle in degrees.
        cutoff_deg: f32,
    },
}

fn default_background() -> Vec3 {
    Vec3(0.1, 0.1, 0.1)
}

#[derive(Deserialize)]
struct SceneFile {
    camera: CameraConfig,
    render: RenderConfig,
    #[serde(default = "default_background", deserialize_with = "vec3_from_array")]
    background: Vec3,
    materials: HashMap<String, MaterialJson>,
    spheres: Vec<SphereJson>,
    lights: Vec<LightJson>,
}

/// The world the tracer sees: read-only for the whole render.
#[derive(Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    /// Returned for rays that miss everything or exhaust the bounce budget.
    pub background: Vec3,
}

/// A fully loaded scene file.
#[derive(Debug)]
pub struct LoadedScene {
    pub camera: CameraConfig,
    pub render: RenderConfig,
    pub scene: Scene,
}

pub fn load(path: &str) -> Result<LoadedScene, SceneError> {
    let data = std::fs::read_to_string(path)?;
    parse(&data)
}

pub fn parse(data: &str) -> Result<LoadedScene, SceneError> {
    let file: SceneFile = serde_json::from_str(data)?;

    let materials: HashMap<String, Material> = file
        .materials
        .into_iter()
        .map(|(name, m)| {
            let mat = Material {
                kind: m.kind,
                color: m.rgb.into(),
                ior: m.ior,
            };
            (name, mat)
        })
        .collect();

    let mut spheres = Vec::new();
    for s in file.spheres {
        let material = *materials.get(&s.mat).ok_or_else(|| SceneError::UnknownMaterial {
            sphere: s.name.clone(),
            material: s.mat.clone(),
        })?;
        if s.radius <= 0.0 {
            return Err(SceneError::InvalidSphere {
                sphere: s.name,
                reason: "radius must be positive",
            });
        }
        if material.kind == MaterialKind::Refractive && material.ior <= 0.0 {
            return Err(SceneError::InvalidSphere {
                sphere: s.name,
                reason: "index of refraction must be positive",
            });
        }
        spheres.push(Sphere {
            name: s.name,
            center: s.center,
            radius: s.radius,
            material,
        });
    }

    let lights = file
        .lights
        .into_iter()
        .map(|l| match l {
            LightJson::Ambient { intensity } => Light::ambient(intensity),
            LightJson::Directional { intensity, direction } => {
                Light::directional(intensity, direction)
            }
            LightJson::Point { intensity, position } => Light::point(intensity, position),
            LightJson::Spot { intensity, position, direction, cutoff_deg } => {
                Light::spot(intensity, position, direction, cutoff_deg.to_radians())
            }
        })
        .collect();

    Ok(LoadedScene {
        camera: file.camera,
        render: file.render,
        scene: Scene {
            spheres,
            lights,
            background: file.background,
        },
    })
}

/// The built-in demo scene: five diffuse spheres, a mirror, a glass sphere,
/// lit by an ambient term and one directional light.
pub fn default_scene() -> LoadedScene {
    let diffuse = |rgb: Vec3| Material { kind: MaterialKind::Diffuse, color: rgb, ior: 1.0 };

    let sphere = |name: &str, center: Vec3, radius: f32, material: Material| Sphere {
        name: name.to_string(),
        center,
        radius,
        material,
    };

    let spheres = vec![
        sphere("cyan", Vec3(2.0, 0.0, 4.0), 1.0, diffuse(Vec3(0.0, 0.8, 0.8))),
        sphere("magenta", Vec3(-2.0, 0.0, 4.0), 0.5, diffuse(Vec3(0.8, 0.0, 0.8))),
        sphere("yellow-high", Vec3(0.0, 2.0, 4.0), 0.5, diffuse(Vec3(0.8, 0.8, 0.0))),
        sphere("blue", Vec3(0.0, -2.0, 4.0), 0.5, diffuse(Vec3(0.2, 0.2, 0.8))),
        sphere("yellow-far", Vec3(0.0, 1.0, 6.0), 0.3, diffuse(Vec3(0.8, 0.8, 0.0))),
        sphere(
            "mirror",
            Vec3(2.0, 2.0, 4.0),
            0.5,
            Material { kind: MaterialKind::Mirror, color: Vec3(0.9, 0.9, 0.9), ior: 1.0 },
        ),
        sphere(
            "glass",
            Vec3(0.0, 0.0, 3.0),
            0.5,
            Material { kind: MaterialKind::Refractive, color: Vec3(0.9, 0.8, 0.8), ior: 1.4 },
        ),
    ];

    let lights = vec![
        Light::ambient(Vec3(0.1, 0.1, 0.1)),
        Light::directional(Vec3(0.4, 0.4, 0.4), Vec3(1.0, -1.0, 0.0)),
    ];

    LoadedScene {
        camera: CameraConfig {
            pos: Vec3::ZERO,
            look_at: Vec3(0.0, 0.0, 1.0),
            up: Vec3(0.0, 1.0, 0.0),
            fov: 90.0,
        },
        render: RenderConfig { width: 512, height: 512 },
        scene: Scene {
            spheres,
            lights,
            background: Vec3(0.1, 0.1, 0.1),
        },
    }
}
