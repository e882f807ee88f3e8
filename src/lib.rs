//! Ray against sphere intersection, plus the thin layers a host needs around it.
//!
//! [`geometry::intersect`] is the whole core. The other modules adapt host values
//! to it, read configuration, and drive it from a per-pixel loop or a benchmark.

pub mod bench;
pub mod binding;
pub mod camera;
pub mod film;
pub mod geometry;
pub mod logger;
pub mod math;
pub mod parsing;
pub mod random;
pub mod render;

pub use geometry::{intersect, HitRecord, Primitive, Sphere};
pub use math::{Ray, Vec3};
