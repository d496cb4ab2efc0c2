use crate::algebra::Vec3;
use serde::Deserialize;

/// Closed set of surface behaviours the tracer dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Diffuse,
    Mirror,
    Refractive,
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Vec3,
    /// Index of refraction. Only read for `Refractive` spheres.
    pub ior: f32,
}
