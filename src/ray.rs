use crate::algebra::Vec3;

/// Ray through the scene: origin + t·direction.
///
/// The tracer expects `direction` to be unit length; every constructor site
/// (camera, reflection, refraction) hands it one.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(self, t: f32) -> Vec3 {
        self.origin.add(self.direction.scale(t))
    }
}
