//! src/optics.rs
//! -------------
//! Reflection and refraction vector math.

use crate::algebra::Vec3;
use thiserror::Error;

/// Refraction failure: the transmission angle would exceed 90 degrees, so no
/// transmitted ray exists and the caller must reflect instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("total internal reflection")]
pub struct TotalInternalReflection;

/// Mirror an incoming direction about a surface normal.
///
/// `incoming` points into the surface. Unit inputs give a unit result, no
/// renormalization needed.
pub fn reflect(incoming: Vec3, normal: Vec3) -> Vec3 {
    incoming.sub(normal.scale(2.0 * incoming.dot(normal)))
}

/// Bend an incident direction through an interface with IOR ratio
/// `eta = n1/n2`.
///
/// `normal` must oppose the incident ray; callers flip it when exiting a
/// sphere. Returns the unit transmitted direction, or
/// `TotalInternalReflection` past the critical angle.
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Result<Vec3, TotalInternalReflection> {
    let cos_i = -incident.dot(normal);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return Err(TotalInternalReflection);
    }
    Ok(incident.scale(eta).add(normal.scale(eta * cos_i - k.sqrt())))
}
