//! Pointer-driven stand-in for the hand-landmark model.
//!
//! The cursor plays the index fingertip, the left button closes the pinch,
//! and the scroll wheel opens or closes the remaining fingers. Frames advance
//! at a fixed camera rate so the scheduler's dedup sees repeated stamps
//! between camera frames, as it would with a real webcam.

use std::time::Instant;

use field_core::landmarks::*;
use field_core::{LandmarkSource, EXTENSION_CLOSED, EXTENSION_OPEN};
use glam::{Vec2, Vec3};

const CAMERA_FPS: f64 = 30.0;
const PINCHED_GAP: f32 = 0.015;
const RELEASED_GAP: f32 = 0.09;
const WRIST_OFFSET: Vec2 = Vec2::new(0.05, 0.3);
const EXTENSION_STEP: f32 = 0.01;

pub struct PointerHand {
    started: Instant,
    cursor: Option<Vec2>,
    pinched: bool,
    extension: f32,
}

impl PointerHand {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            cursor: None,
            pinched: false,
            extension: (EXTENSION_CLOSED + EXTENSION_OPEN) * 0.5,
        }
    }

    /// Cursor position normalized to the window, or `None` when it left.
    pub fn set_cursor(&mut self, uv: Option<Vec2>) {
        self.cursor = uv.map(|p| p.clamp(Vec2::ZERO, Vec2::ONE));
    }

    pub fn set_pinched(&mut self, pinched: bool) {
        self.pinched = pinched;
    }

    /// Open (positive) or close (negative) the hand by scroll notches.
    pub fn scroll(&mut self, notches: f32) {
        let lo = EXTENSION_CLOSED - 0.05;
        let hi = EXTENSION_OPEN + 0.05;
        self.extension = (self.extension + notches * EXTENSION_STEP).clamp(lo, hi);
    }

    fn synthesize(&self, index: Vec2) -> HandLandmarkFrame {
        let wrist = (index + WRIST_OFFSET).extend(0.0);
        let mut points = [wrist; LANDMARK_COUNT];
        points[INDEX_TIP] = index.extend(0.0);
        let gap = if self.pinched { PINCHED_GAP } else { RELEASED_GAP };
        points[THUMB_TIP] = Vec3::new(index.x + gap, index.y, 0.0);
        for (tip, dx) in EXTENSION_TIPS.into_iter().zip([-0.02, 0.0, 0.02]) {
            let reach = (self.extension * self.extension - dx * dx).max(0.0).sqrt();
            points[tip] = wrist + Vec3::new(dx, -reach, 0.0);
        }
        HandLandmarkFrame::new(points)
    }
}

impl Default for PointerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkSource for PointerHand {
    fn frame_stamp(&self) -> Option<f64> {
        let elapsed = self.started.elapsed().as_secs_f64();
        Some((elapsed * CAMERA_FPS).floor())
    }

    fn detect(&mut self, _now_sec: f64) -> Option<HandLandmarkFrame> {
        self.cursor.map(|index| self.synthesize(index))
    }
}
