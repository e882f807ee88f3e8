use std::{error::Error, fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::camera::Eye;
use crate::geometry::Sphere;
use crate::math::Vec3;

/// A single intersection query, laid out the way the host passes its arguments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseData {
    pub dir: Vec3,
    pub ori: Vec3,
    pub c: Vec3,
    pub radius: f32,
    pub col: Value,
}

impl CaseData {
    pub fn as_args(&self) -> Vec<Value> {
        vec![
            serde_json::to_value(self.dir).unwrap_or(Value::Null),
            serde_json::to_value(self.ori).unwrap_or(Value::Null),
            serde_json::to_value(self.c).unwrap_or(Value::Null),
            serde_json::to_value(self.radius).unwrap_or(Value::Null),
            self.col.clone(),
        ]
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct EyeData {
    pub center: [f32; 3],
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl From<EyeData> for Eye {
    fn from(data: EyeData) -> Self {
        Eye::new(data.center.into(), data.width, data.height, data.depth)
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
}

impl From<SphereData> for Sphere<[f32; 3]> {
    fn from(data: SphereData) -> Self {
        Sphere::new(data.center.into(), data.radius, data.color)
    }
}

fn default_background() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn default_resolution() -> usize {
    700
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderData {
    pub eye: EyeData,
    pub sphere: SphereData,
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    #[serde(default = "default_resolution")]
    pub width: usize,
    #[serde(default = "default_resolution")]
    pub height: usize,
}

pub fn load_json<T>(path: impl AsRef<Path>) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path.as_ref())?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
