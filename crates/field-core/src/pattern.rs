//! Base point-cloud generators.
//!
//! Every generator writes `x, y, z` triples into a flat `Vec<f32>`. Builtin
//! shapes return exactly `3 * count` floats. Randomness comes from the
//! caller's RNG, so a seeded [`rand::rngs::StdRng`] makes output reproducible.

use std::f32::consts::TAU;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::RgbaImage;
use rand::Rng;

use crate::error::{FieldError, Result};
use crate::params::{FieldParams, SilhouetteParams};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Sphere,
    Cube,
    Heart,
    Galaxy,
    /// Points drawn from the bright, opaque pixels of an image.
    ImageSilhouette(String),
}

impl Pattern {
    pub const BUILTIN: [Pattern; 4] = [
        Pattern::Sphere,
        Pattern::Cube,
        Pattern::Heart,
        Pattern::Galaxy,
    ];

    pub fn is_image(&self) -> bool {
        matches!(self, Pattern::ImageSilhouette(_))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Sphere => f.write_str("sphere"),
            Pattern::Cube => f.write_str("cube"),
            Pattern::Heart => f.write_str("heart"),
            Pattern::Galaxy => f.write_str("galaxy"),
            Pattern::ImageSilhouette(source) => write!(f, "image:{source}"),
        }
    }
}

impl FromStr for Pattern {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(Pattern::Sphere),
            "cube" => Ok(Pattern::Cube),
            "heart" => Ok(Pattern::Heart),
            "galaxy" => Ok(Pattern::Galaxy),
            _ => Err(FieldError::UnknownPattern(s.to_string())),
        }
    }
}

/// Generate a builtin shape. Returns `None` for image patterns, which need
/// pixel data and go through [`silhouette_from_bytes`] instead.
pub fn generate<R: Rng + ?Sized>(
    pattern: &Pattern,
    count: usize,
    params: &FieldParams,
    rng: &mut R,
) -> Option<Vec<f32>> {
    let points = match pattern {
        Pattern::Sphere => sphere(count, params.sphere_radius, rng),
        Pattern::Cube => cube(count, params.cube_size, rng),
        Pattern::Heart => heart(count, params.heart_scale, params.heart_thickness, rng),
        Pattern::Galaxy => galaxy(count, params.galaxy_radius, params.galaxy_thickness, rng),
        Pattern::ImageSilhouette(_) => return None,
    };
    Some(points)
}

/// Volume-uniform samples inside a ball of `radius`.
pub fn sphere<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let r = radius * rng.gen::<f32>().cbrt();
        let theta = rng.gen::<f32>() * TAU;
        // acos(2u - 1) keeps directions uniform instead of bunching at the poles
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        out.extend_from_slice(&[
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ]);
    }
    out
}

/// Uniform samples inside an axis-aligned cube of edge `size` centred on the origin.
pub fn cube<R: Rng + ?Sized>(count: usize, size: f32, rng: &mut R) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        out.extend_from_slice(&[
            (rng.gen::<f32>() - 0.5) * size,
            (rng.gen::<f32>() - 0.5) * size,
            (rng.gen::<f32>() - 0.5) * size,
        ]);
    }
    out
}

/// Filled heart silhouette in the x/y plane; depth spans `thickness * scale`.
pub fn heart<R: Rng + ?Sized>(count: usize, scale: f32, thickness: f32, rng: &mut R) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let t = rng.gen::<f32>() * TAU;
        // sqrt(u) gives an area-uniform fill of the outline
        let r = rng.gen::<f32>().sqrt();
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        let fill = scale * 0.5 * r;
        let z = (rng.gen::<f32>() - 0.5) * thickness * scale;
        out.extend_from_slice(&[x * fill, y * fill, z]);
    }
    out
}

/// Spiral disc of height `thickness`: each point's angle is offset by its
/// distance from the centre.
pub fn galaxy<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    thickness: f32,
    rng: &mut R,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>() * radius;
        let spiral = angle + r;
        out.extend_from_slice(&[
            spiral.cos() * r,
            (rng.gen::<f32>() - 0.5) * thickness,
            spiral.sin() * r,
        ]);
    }
    out
}

/// Centred, y-up plane coordinates of every sampled pixel passing the mask.
pub fn silhouette_mask(image: &RgbaImage, params: &SilhouetteParams) -> Vec<[f32; 2]> {
    let (w, h) = image.dimensions();
    let stride = params.sample_stride.max(1) as usize;
    let half_w = w as f32 / 2.0;
    let half_h = h as f32 / 2.0;
    let mut kept = Vec::new();
    for py in (0..h).step_by(stride) {
        for px in (0..w).step_by(stride) {
            let [r, g, b, a] = image.get_pixel(px, py).0;
            let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
            if a > params.alpha_threshold && brightness > params.brightness_threshold {
                kept.push([
                    (px as f32 - half_w) * params.scale,
                    -(py as f32 - half_h) * params.scale,
                ]);
            }
        }
    }
    kept
}

/// Draw `count` points with replacement from the image mask, each with its
/// own depth jitter. An empty mask falls back to a sphere of `sphere_radius`.
///
/// Output differs between calls unless `rng` is seeded identically.
pub fn silhouette_points<R: Rng + ?Sized>(
    image: &RgbaImage,
    count: usize,
    params: &FieldParams,
    rng: &mut R,
) -> Vec<f32> {
    let kept = silhouette_mask(image, &params.silhouette);
    if kept.is_empty() {
        log::warn!("[image] mask is empty, falling back to sphere");
        return sphere(count, params.sphere_radius, rng);
    }
    log::debug!("[image] {} pixels kept from {:?}", kept.len(), image.dimensions());
    let jitter = params.silhouette.depth_jitter;
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let [x, y] = kept[rng.gen_range(0..kept.len())];
        out.extend_from_slice(&[x, y, (rng.gen::<f32>() - 0.5) * jitter]);
    }
    out
}

/// Decode encoded image bytes (PNG or JPEG) and build a silhouette from them.
pub fn silhouette_from_bytes<R: Rng + ?Sized>(
    bytes: &[u8],
    count: usize,
    params: &FieldParams,
    rng: &mut R,
) -> Result<Vec<f32>> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    Ok(silhouette_points(&image, count, params, rng))
}

/// Read and decode an image file, then build a silhouette from it.
pub fn silhouette_from_path<R: Rng + ?Sized>(
    path: &Path,
    count: usize,
    params: &FieldParams,
    rng: &mut R,
) -> Result<Vec<f32>> {
    let image = image::open(path)?.to_rgba8();
    Ok(silhouette_points(&image, count, params, rng))
}
