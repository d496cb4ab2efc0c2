//! src/light.rs
//! ------------
//! Analytic light sources.
//!
//! Four variants with different geometry: ambient light has neither a
//! direction nor a location, directional light has only a direction, point
//! and spot lights sit at a world-space location. Direction and location are
//! therefore fallible queries; shading code checks `kind()` first and never
//! hits the error path.

use crate::algebra::Vec3;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
    Spot,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LightError {
    #[error("{0:?} lights have no direction")]
    NoDirection(LightKind),
    #[error("{0:?} lights have no location")]
    NoLocation(LightKind),
}

#[derive(Clone, Debug)]
pub enum Light {
    /// Uniform everywhere, no falloff, never shadowed.
    Ambient { intensity: Vec3 },
    /// Fixed incoming direction, no falloff.
    Directional { intensity: Vec3, direction: Vec3 },
    /// Inverse-square falloff from a world position.
    Point { intensity: Vec3, location: Vec3 },
    /// Point light restricted to a hard-edged cone.
    Spot {
        intensity: Vec3,
        location: Vec3,
        direction: Vec3,
        /// Cosine of the cone half-angle; surface directions whose cosine
        /// against `direction` falls below this receive nothing.
        cos_cutoff: f32,
    },
}

impl Light {
    pub fn ambient(intensity: Vec3) -> Self {
        Light::Ambient { intensity }
    }

    pub fn directional(intensity: Vec3, direction: Vec3) -> Self {
        Light::Directional { intensity, direction: direction.normalize() }
    }

    pub fn point(intensity: Vec3, location: Vec3) -> Self {
        Light::Point { intensity, location }
    }

    /// `cutoff` is the cone half-angle in radians.
    pub fn spot(intensity: Vec3, location: Vec3, direction: Vec3, cutoff: f32) -> Self {
        Light::Spot {
            intensity,
            location,
            direction: direction.normalize(),
            cos_cutoff: cutoff.cos(),
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Ambient { .. } => LightKind::Ambient,
            Light::Directional { .. } => LightKind::Directional,
            Light::Point { .. } => LightKind::Point,
            Light::Spot { .. } => LightKind::Spot,
        }
    }

    /// Raw RGB intensity, before any falloff.
    pub fn intensity(&self) -> Vec3 {
        match *self {
            Light::Ambient { intensity }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => intensity,
        }
    }

    /// Intensity arriving at a surface point.
    ///
    /// Ambient and directional lights have no falloff. Point and spot lights
    /// fall off with the inverse square of the distance; a spot light is
    /// additionally zero outside its cone.
    pub fn intensity_at(&self, point: Vec3) -> Vec3 {
        match *self {
            Light::Ambient { intensity } | Light::Directional { intensity, .. } => intensity,
            Light::Point { intensity, location } => {
                intensity.scale(1.0 / location.sub(point).norm_squared())
            }
            Light::Spot { intensity, location, direction, cos_cutoff } => {
                let to_surface = point.sub(location).normalize();
                if to_surface.dot(direction) < cos_cutoff {
                    return Vec3::ZERO;
                }
                intensity.scale(1.0 / location.sub(point).norm_squared())
            }
        }
    }

    /// Unit direction the light travels to reach `point` (light → surface).
    pub fn direction(&self, point: Vec3) -> Result<Vec3, LightError> {
        match *self {
            Light::Ambient { .. } => Err(LightError::NoDirection(LightKind::Ambient)),
            Light::Directional { direction, .. } => Ok(direction),
            Light::Point { location, .. } | Light::Spot { location, .. } => {
                Ok(point.sub(location).normalize())
            }
        }
    }

    /// World position of the emitter, where one exists.
    pub fn location(&self) -> Result<Vec3, LightError> {
        match *self {
            Light::Ambient { .. } => Err(LightError::NoLocation(LightKind::Ambient)),
            Light::Directional { .. } => Err(LightError::NoLocation(LightKind::Directional)),
            Light::Point { location, .. } | Light::Spot { location, .. } => Ok(location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_has_no_geometry() {
        let light = Light::ambient(Vec3(0.1, 0.1, 0.1));
        assert_eq!(light.kind(), LightKind::Ambient);
        assert_eq!(
            light.direction(Vec3::ZERO),
            Err(LightError::NoDirection(LightKind::Ambient))
        );
        assert_eq!(light.location(), Err(LightError::NoLocation(LightKind::Ambient)));
    }

    #[test]
    fn test_directional_normalizes_and_has_no_location() {
        let light = Light::directional(Vec3(0.4, 0.4, 0.4), Vec3(2.0, -2.0, 0.0));
        let dir = light.direction(Vec3(5.0, 5.0, 5.0)).unwrap();
        assert!((dir.norm() - 1.0).abs() < 1e-5);
        assert!(dir.sub(Vec3(1.0, -1.0, 0.0).normalize()).norm() < 1e-5);
        assert_eq!(light.location(), Err(LightError::NoLocation(LightKind::Directional)));
        // same intensity everywhere
        let a = light.intensity_at(Vec3::ZERO);
        let b = light.intensity_at(Vec3(100.0, 0.0, 0.0));
        assert!(a.sub(b).norm() < 1e-6);
    }

    #[test]
    fn test_point_inverse_square_falloff() {
        let light = Light::point(Vec3(8.0, 8.0, 8.0), Vec3(0.0, 2.0, 0.0));
        let at = light.intensity_at(Vec3::ZERO); // distance 2
        assert!((at.0 - 2.0).abs() < 1e-5);

        let dir = light.direction(Vec3::ZERO).unwrap();
        assert!(dir.sub(Vec3(0.0, -1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_spot_hard_cone_edge() {
        // Downward spot with a 45-degree half-angle.
        let cutoff = std::f32::consts::FRAC_PI_4;
        let light = Light::spot(
            Vec3(4.0, 4.0, 4.0),
            Vec3(0.0, 1.0, 0.0),
            Vec3(0.0, -1.0, 0.0),
            cutoff,
        );

        // Straight below: well inside the cone, inverse-square applies.
        let inside = light.intensity_at(Vec3(0.0, -1.0, 0.0));
        assert!((inside.0 - 1.0).abs() < 1e-5); // distance 2 -> 4/4

        // Just inside the edge the full inverse-square value arrives,
        // with no angular falloff.
        let near_edge = Vec3(0.99, 0.0, 0.0);
        let got = light.intensity_at(near_edge);
        let expected = 4.0 / near_edge.sub(Vec3(0.0, 1.0, 0.0)).norm_squared();
        assert!((got.0 - expected).abs() < 1e-4);

        // Just beyond it the intensity drops to exactly zero.
        let outside = light.intensity_at(Vec3(1.01, 0.0, 0.0));
        assert_eq!(outside.0, 0.0);
        assert_eq!(outside.1, 0.0);
        assert_eq!(outside.2, 0.0);
    }
}
