//! Hand landmark frames as produced by the inference collaborator.
//!
//! Coordinates are normalized to the camera image: x and y in \[0, 1\], z a
//! rough relative depth. Only the x/y plane is used for distances.

use glam::{Vec2, Vec3};

use crate::error::{FieldError, Result};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertips whose reach from the wrist measures how open the hand is.
pub const EXTENSION_TIPS: [usize; 3] = [MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// One detected hand: 21 landmarks in the fixed MediaPipe order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarkFrame {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarkFrame {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a frame from `x, y, z` triples laid out back to back.
    pub fn from_flat(coords: &[f32]) -> Result<Self> {
        let expected = LANDMARK_COUNT * 3;
        if coords.len() != expected {
            return Err(FieldError::MalformedLandmarks {
                expected,
                got: coords.len(),
            });
        }
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (p, c) in points.iter_mut().zip(coords.chunks_exact(3)) {
            *p = Vec3::new(c[0], c[1], c[2]);
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.points
    }

    /// Distance between two landmarks ignoring depth.
    #[inline]
    pub fn planar_distance(&self, a: usize, b: usize) -> f32 {
        planar_distance(self.points[a], self.points[b])
    }

    /// Thumb tip to index tip.
    #[inline]
    pub fn pinch_distance(&self) -> f32 {
        self.planar_distance(THUMB_TIP, INDEX_TIP)
    }

    /// Mean wrist-to-tip distance over the middle, ring, and pinky fingers.
    pub fn average_extension(&self) -> f32 {
        let sum: f32 = EXTENSION_TIPS
            .iter()
            .map(|&tip| self.planar_distance(WRIST, tip))
            .sum();
        sum / EXTENSION_TIPS.len() as f32
    }

    /// Index fingertip projected onto the image plane.
    #[inline]
    pub fn index_tip_position(&self) -> Vec2 {
        self.points[INDEX_TIP].truncate()
    }
}

#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    a.truncate().distance(b.truncate())
}
