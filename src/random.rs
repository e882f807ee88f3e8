use crate::math::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Debug)]
pub struct Sample2D {
    pub x: f32,
    pub y: f32,
}

impl Sample2D {
    pub fn new(x: f32, y: f32) -> Self {
        debug_assert!(x < 1.0 && x >= 0.0);
        debug_assert!(y < 1.0 && y >= 0.0);

        Sample2D { x, y }
    }
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Sample2D::new(rng.gen(), rng.gen())
    }
}

pub fn random_on_unit_sphere(r: Sample2D) -> Vec3 {
    let Sample2D { x, y } = r;

    let phi = x * 2.0 * PI;
    let z = y * 2.0 - 1.0;
    let r = (1.0 - z * z).sqrt();

    let (s, c) = phi.sin_cos();

    Vec3::new(r * c, r * s, z)
}

/// Uniform point in the axis aligned cube `[-half_extent, half_extent)^3`.
pub fn random_in_cube<R: Rng>(rng: &mut R, half_extent: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_extent..half_extent),
        rng.gen_range(-half_extent..half_extent),
        rng.gen_range(-half_extent..half_extent),
    )
}
