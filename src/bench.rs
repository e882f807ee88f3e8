use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::geometry::intersect;
use crate::math::Vec3;
use crate::random::{random_in_cube, random_on_unit_sphere, Sample2D};

#[derive(Copy, Clone, Debug)]
pub struct BenchCase {
    pub direction: Vec3,
    pub origin: Vec3,
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Copy, Clone, Debug)]
pub struct BenchReport {
    pub count: usize,
    pub hits: usize,
    pub elapsed: Duration,
}

impl BenchReport {
    pub fn rays_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.count as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

/// Reproducible set of queries. Directions are scaled so they are rarely unit length.
pub fn generate_cases(count: usize, seed: u64) -> Vec<BenchCase> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let direction = random_on_unit_sphere(Sample2D::from_rng(&mut rng));
            let length = 0.5 + 2.0 * rng.gen::<f32>();
            BenchCase {
                direction: direction * length,
                origin: random_in_cube(&mut rng, 10.0),
                center: random_in_cube(&mut rng, 2.0),
                radius: rng.gen_range(0.1..4.0),
            }
        })
        .collect()
}

pub fn run_cases(cases: &[BenchCase]) -> BenchReport {
    let start = Instant::now();
    let hits = cases
        .par_iter()
        .filter(|c| intersect(c.direction, c.origin, c.center, c.radius, ()).is_some())
        .count();
    let elapsed = start.elapsed();
    debug!("{} of {} rays hit in {:?}", hits, cases.len(), elapsed);
    BenchReport {
        count: cases.len(),
        hits,
        elapsed,
    }
}

pub fn run_bench(count: usize, seed: u64) -> BenchReport {
    let cases = generate_cases(count, seed);
    run_cases(&cases)
}
