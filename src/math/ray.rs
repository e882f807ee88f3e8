use super::Vec3;

/// Half-line `origin + t * direction`. The direction is kept exactly as given.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }
    pub fn point_at_parameter(self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vec3::default(), Vec3::default())
    }
}
