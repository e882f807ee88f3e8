//! Adapter between dynamic host values and the intersection core.
//!
//! The host hands over `serde_json::Value`s in the shape
//! `intersect(rayDirection, rayOrigin, sphereCenter, sphereRadius, colour)`.
//! Arity and argument kinds are checked here; the core never sees a malformed call.

use log::trace;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::geometry::intersect;
use crate::math::Vec3;

pub const NUM_ARGS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("Wrong number of arguments: expected {expected}, got {got}")]
    WrongArity { expected: usize, got: usize },
    #[error("Wrong arguments types")]
    WrongTypes,
}

// fields that are missing or not numbers read as NaN, like an undefined property would
fn component(obj: &Map<String, Value>, key: &str) -> f32 {
    obj.get(key)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(f32::NAN)
}

pub fn unpack_vector(obj: &Map<String, Value>) -> Vec3 {
    Vec3::new(
        component(obj, "x"),
        component(obj, "y"),
        component(obj, "z"),
    )
}

// JSON cannot carry NaN or infinity, serde_json writes those as null
pub fn pack_vector(v: Vec3) -> Value {
    json!({ "x": v.x, "y": v.y, "z": v.z })
}

/// Run one intersection on host values.
///
/// Returns `Value::Null` on a miss, otherwise `{"t": .., "pi": {..}, "col": ..}` where
/// `col` is the fifth argument handed back untouched.
pub fn intersect_values(args: &[Value]) -> Result<Value, BindingError> {
    if args.len() != NUM_ARGS {
        return Err(BindingError::WrongArity {
            expected: NUM_ARGS,
            got: args.len(),
        });
    }
    let (direction, origin, center, radius) =
        match (&args[0], &args[1], &args[2], &args[3], &args[4]) {
            (
                Value::Object(direction),
                Value::Object(origin),
                Value::Object(center),
                Value::Number(radius),
                Value::Object(_),
            ) => (
                unpack_vector(direction),
                unpack_vector(origin),
                unpack_vector(center),
                radius.as_f64().map(|r| r as f32).unwrap_or(f32::NAN),
            ),
            _ => return Err(BindingError::WrongTypes),
        };
    trace!(
        "intersect dir={:?} ori={:?} c={:?} r={}",
        direction,
        origin,
        center,
        radius
    );

    match intersect(direction, origin, center, radius, &args[4]) {
        Some(hit) => Ok(json!({
            "t": hit.distance,
            "pi": pack_vector(hit.point),
            "col": hit.payload.clone(),
        })),
        None => Ok(Value::Null),
    }
}
