//! The live particle field.
//!
//! Base positions hold the active pattern. Every frame the live positions are
//! recomputed directly from the bases, the clock, and the scale factor, and
//! the field rotation eases toward the hand (or drifts when auto-rotating).
//! Nothing integrates across frames apart from the rotation.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::error::{FieldError, Result};
use crate::params::FieldParams;
use crate::pattern::{self, Pattern};
use crate::state::{PointColor, Rotation};

/// Handle for an in-flight image pattern. Only the most recently issued
/// ticket may still change the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageTicket {
    pub generation: u64,
    /// Seed for the RNG the decoder should sample with.
    pub seed: u64,
}

pub struct ParticleField {
    // Private so the particle count cannot drift from the buffer lengths.
    params: FieldParams,
    count: usize,
    base_positions: Vec<f32>,
    jitter_seeds: Vec<f32>,
    live_positions: Vec<f32>,
    rotation: Rotation,
    pattern: Pattern,
    color: PointColor,
    image_generation: u64,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field showing the default sphere.
    pub fn new(params: FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = params.count;
        let base_positions = pattern::sphere(count, params.sphere_radius, &mut rng);
        let jitter_seeds = (0..count * 3)
            .map(|_| (rng.gen::<f32>() - 0.5) * 0.1)
            .collect::<Vec<_>>();
        log::info!("[field] {} particles, pattern=sphere, seed={}", count, seed);
        Self {
            live_positions: base_positions.clone(),
            base_positions,
            jitter_seeds,
            rotation: Rotation::default(),
            pattern: Pattern::Sphere,
            color: PointColor::default(),
            image_generation: 0,
            rng,
            count,
            params,
        }
    }

    /// Number of particles, fixed for the life of the field.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn base_positions(&self) -> &[f32] {
        &self.base_positions
    }

    /// Per-particle seeds fixed at creation; not used by the position update.
    pub fn jitter_seeds(&self) -> &[f32] {
        &self.jitter_seeds
    }

    /// Positions produced by the last [`Self::update_positions`], three floats per point.
    pub fn positions(&self) -> &[f32] {
        &self.live_positions
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn color(&self) -> PointColor {
        self.color
    }

    pub fn set_color(&mut self, color: PointColor) {
        self.color = color;
    }

    pub fn auto_rotate(&self) -> bool {
        self.params.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.params.auto_rotate = enabled;
        log::info!("[field] auto-rotate {}", if enabled { "on" } else { "off" });
    }

    /// Yaw added per frame while auto-rotating, in radians.
    pub fn set_rotation_speed(&mut self, radians_per_frame: f32) {
        self.params.rotation_speed = radians_per_frame;
    }

    /// Recompute live positions from the bases.
    ///
    /// `scale_factor` 0 keeps the shape tight and still; 1 spreads it out with
    /// the strongest wobble. The noise phase is keyed on each particle's own
    /// base coordinates.
    pub fn update_positions(&mut self, scale_factor: f32, time_sec: f64) {
        let expansion = EXPANSION_BASE + scale_factor * EXPANSION_SPAN;
        let noise = scale_factor * NOISE_AMPLITUDE;
        // sin/cos are periodic, so wrapping in f64 keeps phase precision in long sessions
        let t = time_sec.rem_euclid(std::f64::consts::TAU) as f32;
        for (live, base) in self
            .live_positions
            .chunks_exact_mut(3)
            .zip(self.base_positions.chunks_exact(3))
        {
            let (bx, by, bz) = (base[0], base[1], base[2]);
            live[0] = bx * expansion + (t + by).sin() * noise;
            live[1] = by * expansion + (t + bz).cos() * noise;
            live[2] = bz * expansion + (t + bx).sin() * noise;
        }
    }

    /// Ease the rotation toward the hand, or drift when no hand is visible.
    pub fn update_rotation(&mut self, hand_position: Option<Vec2>) {
        match hand_position {
            Some(hand) => {
                let target_yaw = -(hand.x - 0.5) * YAW_RANGE;
                let target_pitch = (hand.y - 0.5) * PITCH_RANGE;
                let k = self.params.smoothing;
                self.rotation.yaw += (target_yaw - self.rotation.yaw) * k;
                self.rotation.pitch += (target_pitch - self.rotation.pitch) * k;
            }
            None if self.params.auto_rotate => {
                self.rotation.yaw += self.params.rotation_speed;
            }
            None => {}
        }
    }

    /// Switch to `pattern`.
    ///
    /// Returns `Ok(false)` when the request is a no-op: the pattern is already
    /// active and no new image data came with it. Image patterns decode
    /// `image` synchronously; on failure the field is left untouched and any
    /// pending image ticket stays valid.
    pub fn set_pattern(&mut self, pattern: Pattern, image: Option<&[u8]>) -> Result<bool> {
        if image.is_none() && pattern == self.pattern {
            return Ok(false);
        }
        if let Pattern::ImageSilhouette(source) = &pattern {
            let Some(bytes) = image else {
                return Err(FieldError::MissingImageSource(source.clone()));
            };
            let mut rng = StdRng::seed_from_u64(self.rng.gen());
            let points = pattern::silhouette_from_bytes(bytes, self.count, &self.params, &mut rng)
                .inspect_err(|e| log::warn!("[image] `{}` failed: {}", source, e))?;
            if points.len() < 3 {
                return Ok(false);
            }
            // Only a decoded image supersedes a pending one.
            self.image_generation += 1;
            self.apply_points(pattern.clone(), &points);
            return Ok(true);
        }

        let count = self.count;
        let Some(points) = pattern::generate(&pattern, count, &self.params, &mut self.rng) else {
            return Ok(false);
        };
        // A builtin switch supersedes any image still decoding.
        self.image_generation += 1;
        self.apply_points(pattern, &points);
        Ok(true)
    }

    /// Reserve the next image switch. Earlier tickets become stale.
    pub fn begin_image(&mut self) -> ImageTicket {
        self.image_generation += 1;
        ImageTicket {
            generation: self.image_generation,
            seed: self.rng.gen(),
        }
    }

    /// Apply the decoded result for `ticket`.
    ///
    /// Stale tickets are ignored (`Ok(false)`). Decode errors are returned
    /// and leave the active pattern and base positions unchanged.
    pub fn finish_image(
        &mut self,
        ticket: ImageTicket,
        source: String,
        points: Result<Vec<f32>>,
    ) -> Result<bool> {
        if ticket.generation != self.image_generation {
            log::debug!(
                "[image] dropping stale result for `{}` (generation {} < {})",
                source,
                ticket.generation,
                self.image_generation
            );
            return Ok(false);
        }
        let points = points.inspect_err(|e| log::warn!("[image] `{}` failed: {}", source, e))?;
        if points.len() < 3 {
            return Ok(false);
        }
        self.apply_points(Pattern::ImageSilhouette(source), &points);
        Ok(true)
    }

    fn apply_points(&mut self, pattern: Pattern, points: &[f32]) {
        let resampled = resample(points, self.count);
        if resampled.is_empty() && self.count > 0 {
            return;
        }
        log::info!(
            "[field] pattern {} -> {} ({} source points)",
            self.pattern,
            pattern,
            points.len() / 3
        );
        self.base_positions = resampled;
        self.pattern = pattern;
    }
}

/// Fit `points` (x, y, z triples) to exactly `count` points by wrapping the
/// index: point `i` takes source point `i mod m`. Empty input yields an empty
/// vector. Trailing floats that do not form a full triple are ignored.
pub fn resample(points: &[f32], count: usize) -> Vec<f32> {
    let m = points.len() / 3;
    if m == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(count * 3);
    for i in 0..count {
        let j = (i % m) * 3;
        out.extend_from_slice(&points[j..j + 3]);
    }
    out
}
