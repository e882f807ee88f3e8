use crate::math::{Ray, Vec3};

/// The observer: sits at `center` looking down +z through a `width` x `height`
/// window placed `depth` in front of it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Eye {
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Eye {
    pub fn new(center: Vec3, width: f32, height: f32, depth: f32) -> Eye {
        Eye {
            center,
            width,
            height,
            depth,
        }
    }

    // step between neighbouring pixels; a single pixel sits at the window centre
    fn step(extent: f32, count: usize) -> Option<f32> {
        if count > 1 {
            Some(extent / (count - 1) as f32)
        } else {
            None
        }
    }

    /// Ray through pixel `(col, row)` of a `cols` x `rows` grid, row 0 at the top.
    ///
    /// The direction points at the window and is left unnormalized.
    pub fn get_ray(&self, col: usize, row: usize, cols: usize, rows: usize) -> Ray {
        let x = match Eye::step(self.width, cols) {
            Some(dx) => -self.width / 2.0 + col as f32 * dx,
            None => 0.0,
        };
        let y = match Eye::step(self.height, rows) {
            Some(dy) => self.height / 2.0 - row as f32 * dy,
            None => 0.0,
        };
        Ray::new(self.center, Vec3::new(x, y, self.depth))
    }
}
