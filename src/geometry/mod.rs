use crate::math::{Ray, Vec3};

mod sphere;

pub use sphere::{intersect, Sphere};

/// Result of a successful ray test. Built fresh per call and owned by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord<P> {
    pub distance: f32,
    pub point: Vec3,
    pub payload: P,
}

impl<P> HitRecord<P> {
    pub fn new(distance: f32, point: Vec3, payload: P) -> Self {
        HitRecord {
            distance,
            point,
            payload,
        }
    }
}

pub trait Primitive {
    type Payload;
    fn intersect(&self, r: Ray) -> Option<HitRecord<Self::Payload>>;
}
