//! Pinch-latched gesture classification.
//!
//! A thumb/index pinch selects [`ControlMode::Scale`]; an open pinch selects
//! [`ControlMode::Rotate`]. Entering and leaving the pinch use separate
//! thresholds so sensor jitter near the boundary cannot flip the mode. Each
//! processed frame updates only the signal owned by the active mode; the
//! other one stays frozen.

use glam::Vec2;

use crate::landmarks::HandLandmarkFrame;
use crate::params::GestureParams;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    #[default]
    Rotate,
    Scale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub mode: ControlMode,
    /// Smoothed openness of the hand, always within \[0, 1\].
    pub scale_factor: f32,
    /// Raw index fingertip position; `None` while no hand is visible.
    pub hand_position: Option<Vec2>,
    pub pinch_latched: bool,
}

pub struct GestureClassifier {
    pub params: GestureParams,
    state: GestureState,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureParams::default())
    }
}

impl GestureClassifier {
    pub fn new(params: GestureParams) -> Self {
        Self {
            params,
            state: GestureState::default(),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    /// Fold one inference result into the gesture state.
    ///
    /// `None` means no hand was detected: the hand position is cleared and
    /// everything else keeps its last value.
    pub fn update(&mut self, frame: Option<&HandLandmarkFrame>) -> &GestureState {
        let Some(frame) = frame else {
            self.state.hand_position = None;
            return &self.state;
        };

        let was_latched = self.state.pinch_latched;
        self.state.pinch_latched = self.next_latch(frame.pinch_distance());
        if was_latched != self.state.pinch_latched {
            log::debug!(
                "[gesture] pinch {}",
                if self.state.pinch_latched { "latched" } else { "released" }
            );
        }

        if self.state.pinch_latched {
            self.state.mode = ControlMode::Scale;
            let target = self.extension_target(frame.average_extension());
            self.state.scale_factor += (target - self.state.scale_factor) * self.params.smoothing;
            // Both endpoints lie in [0, 1]; clamp away float drift.
            self.state.scale_factor = self.state.scale_factor.clamp(0.0, 1.0);
        } else {
            self.state.mode = ControlMode::Rotate;
            self.state.hand_position = Some(frame.index_tip_position());
        }
        &self.state
    }

    fn next_latch(&self, pinch_distance: f32) -> bool {
        match self.state.pinch_latched {
            false if pinch_distance < self.params.pinch_enter => true,
            true if pinch_distance > self.params.pinch_exit => false,
            latched => latched,
        }
    }

    fn extension_target(&self, avg_extension: f32) -> f32 {
        let span = self.params.extension_open - self.params.extension_closed;
        ((avg_extension - self.params.extension_closed) / span).clamp(0.0, 1.0)
    }
}
