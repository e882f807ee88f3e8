use crate::geometry::{HitRecord, Primitive};
use crate::math::{Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere<P> {
    pub center: Vec3,
    pub radius: f32,
    pub payload: P,
}

impl<P> Sphere<P> {
    pub fn new(center: Vec3, radius: f32, payload: P) -> Sphere<P> {
        Sphere {
            center,
            radius,
            payload,
        }
    }
}

/// Nearest intersection of the ray `ray_origin + t * ray_direction` with a sphere.
///
/// Only the smaller root of the quadratic is ever considered, and it has to be
/// strictly positive. So a tangent ray (discriminant of exactly zero), a sphere
/// behind the origin, an origin sitting on the surface and an origin inside the
/// sphere all report `None`. The direction does not need to be normalized; a zero
/// direction makes the discriminant zero and therefore also reports `None`.
///
/// Non-finite inputs are not checked and just propagate through the arithmetic.
pub fn intersect<P>(
    ray_direction: Vec3,
    ray_origin: Vec3,
    sphere_center: Vec3,
    sphere_radius: f32,
    payload: P,
) -> Option<HitRecord<P>> {
    let a = ray_direction.dot(ray_direction);
    let b = 2.0 * (ray_direction.dot(ray_origin) - ray_direction.dot(sphere_center));
    let c = ray_origin.dot(ray_origin) - 2.0 * ray_origin.dot(sphere_center)
        + sphere_center.dot(sphere_center)
        - sphere_radius * sphere_radius;
    let discriminant = b * b - 4.0 * a * c;
    // NaN has to land on the miss side
    if !(discriminant > 0.0) {
        return None;
    }
    let discriminant_sqrt = discriminant.sqrt();
    let near = -b - discriminant_sqrt;
    if !(near > 0.0) {
        return None;
    }
    let time = near / (2.0 * a);
    let point = ray_origin.add(ray_direction.scale(time));
    Some(HitRecord::new(time, point, payload))
}

impl<P: Clone> Primitive for Sphere<P> {
    type Payload = P;
    fn intersect(&self, r: Ray) -> Option<HitRecord<P>> {
        intersect(
            r.direction,
            r.origin,
            self.center,
            self.radius,
            self.payload.clone(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    fn hit(direction: Vec3, origin: Vec3, center: Vec3, radius: f32) -> Option<HitRecord<u32>> {
        intersect(direction, origin, center, radius, 7u32)
    }

    #[test]
    fn test_miss_beyond_discriminant() {
        let result = hit(Vec3::X, Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_tangent_is_a_miss() {
        let result = hit(Vec3::X, Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_canonical_hit() {
        let result = hit(Vec3::X, Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, 1.0).unwrap();
        assert_eq!(result.distance, 4.0);
        assert_eq!(result.point, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(result.payload, 7);
    }

    #[test]
    fn test_unnormalized_direction() {
        // doubling the direction halves the parameter but keeps the point
        let result = hit(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::ZERO,
            1.0,
        )
        .unwrap();
        assert_eq!(result.distance, 2.0);
        assert_eq!(result.point, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let result = hit(Vec3::X, Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_origin_inside_sphere() {
        // far root is t = 1 but only the near root (t = -1) is looked at
        let result = hit(Vec3::X, Vec3::ZERO, Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_origin_on_surface() {
        let result = hit(Vec3::X, Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_zero_direction() {
        let result = hit(Vec3::ZERO, Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_negative_radius_behaves_like_positive() {
        let pos = hit(Vec3::X, Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        let neg = hit(Vec3::X, Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, -1.0);
        assert_eq!(pos, neg);
    }

    #[test]
    fn test_nan_input_does_not_hit() {
        let result = hit(
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_reference_fixture() {
        let result = intersect(
            Vec3::new(0.09690059143094072, 0.026037001021610728, 0.9949534411007053),
            Vec3::new(0.0, 2.0, -15.0),
            Vec3::new(1.5524163574746117, 1.6, 0.001858237138153862),
            0.8,
            "white",
        )
        .unwrap();
        assert!((result.distance - 15.006141).abs() < 0.001, "{:?}", result);
        let expected = Vec3::new(1.4541039, 2.3907149, -0.06958824);
        assert!((result.point - expected).norm() < 0.001, "{:?}", result);
        assert_eq!(result.payload, "white");
    }

    #[test]
    fn test_payload_pass_through() {
        let payload = Arc::new(String::from("material: glass"));
        let result = intersect(
            Vec3::X,
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::ZERO,
            1.0,
            Arc::clone(&payload),
        )
        .unwrap();
        assert!(Arc::ptr_eq(&result.payload, &payload));
    }

    #[test]
    fn test_primitive_matches_free_function() {
        let sphere = Sphere::new(Vec3::new(0.0, 1.5, 0.0), 1.0, [200u8, 100, 255]);
        let ray = Ray::new(Vec3::new(0.0, 1.5, -10.0), Vec3::new(0.0, 0.0, 2.0));
        let via_trait = Primitive::intersect(&sphere, ray).unwrap();
        let via_fn = intersect(ray.direction, ray.origin, sphere.center, sphere.radius, sphere.payload);
        assert_eq!(Some(via_trait), via_fn);
        assert_eq!(via_trait.distance, 4.5);
    }

    #[test]
    fn test_determinism() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let d = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            let o = Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let r = rng.gen_range(0.1..3.0);
            let first = hit(d, o, Vec3::ZERO, r);
            let second = hit(d, o, Vec3::ZERO, r);
            match (first, second) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_eq!(a.distance.to_bits(), b.distance.to_bits());
                    assert_eq!(a.point.as_array().map(f32::to_bits), b.point.as_array().map(f32::to_bits));
                }
                (a, b) => panic!("{:?} {:?}", a, b),
            }
        }
    }

    #[test]
    fn test_scale_invariance() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut checked = 0;
        for _ in 0..2000 {
            let center = Vec3::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let offset = Vec3::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
            let direction = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            let radius: f32 = rng.gen_range(0.2..3.0);
            let k: f32 = rng.gen_range(0.25..4.0);
            let m: f32 = rng.gen_range(0.25..4.0);

            // skip configurations that sit numerically on the tangent or surface boundary
            let oc = offset;
            let along = oc.dot(direction) / direction.norm();
            let miss_distance_sq = oc.norm_squared() - along * along;
            if (miss_distance_sq.max(0.0).sqrt() - radius).abs() < 0.05
                || (oc.norm() - radius).abs() < 0.05
                || direction.norm() < 0.05
            {
                continue;
            }

            let base = hit(direction, center + offset, center, radius).is_some();
            let scaled = hit(direction * m, center + offset * k, center, radius * k).is_some();
            assert_eq!(base, scaled, "{:?} {:?} {} {} {}", offset, direction, radius, k, m);
            checked += 1;
        }
        assert!(checked > 1000);
    }
}
