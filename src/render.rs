//! Per-pixel driver around the sphere test: one primitive, one ray per pixel.
//!
//! A pixel takes the sphere's payload colour on a hit and the background colour
//! otherwise. There is no lighting of any kind.

use std::error::Error;
use std::path::Path;

use image::{ImageBuffer, Rgb};
use log::info;
use rayon::prelude::*;

use crate::camera::Eye;
use crate::film::Film;
use crate::geometry::{Primitive, Sphere};

pub type Color = [f32; 3];

pub fn render_hits(
    eye: &Eye,
    sphere: &Sphere<Color>,
    background: Color,
    width: usize,
    height: usize,
) -> Film<Color> {
    let mut film = Film::new(width, height, background);
    film.buffer.par_iter_mut().enumerate().for_each(|(i, e)| {
        let x = i % width;
        let y = i / width;
        let ray = eye.get_ray(x, y, width, height);
        if let Some(hit) = sphere.intersect(ray) {
            *e = hit.payload;
        }
    });
    film
}

/// Fraction of pixels that are not the background colour.
pub fn coverage(film: &Film<Color>, background: Color) -> f32 {
    if film.total_pixels() == 0 {
        return 0.0;
    }
    let hits = film.buffer.par_iter().filter(|c| **c != background).count();
    hits as f32 / film.total_pixels() as f32
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn save_png(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(film.width as u32, film.height as u32, |x, y| {
            let c = film.at(x as usize, y as usize);
            Rgb([to_u8(c[0]), to_u8(c[1]), to_u8(c[2])])
        });
    img.save(path)?;
    info!("saved {}", path.display());
    Ok(())
}

pub fn save_exr(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        let c = film.at(x, y);
        (c[0], c[1], c[2])
    })?;
    info!("saved {}", path.display());
    Ok(())
}

/// Write the film, picking the format from the file extension.
pub fn save_film(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(film, path),
        Some("exr") => save_exr(film, path),
        other => Err(format!("unsupported output format {:?} for {}", other, path.display()).into()),
    }
}
