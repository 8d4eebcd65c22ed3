//! Per-refresh driver: inference (deduplicated), classification, field update.

use crate::field::ParticleField;
use crate::gesture::{GestureClassifier, GestureState};
use crate::landmarks::HandLandmarkFrame;

/// The inference collaborator as seen from the frame loop.
pub trait LandmarkSource {
    /// Identifier of the newest camera frame, e.g. the video timestamp.
    /// `None` while no camera frame is available.
    fn frame_stamp(&self) -> Option<f64>;

    /// Run inference on the newest camera frame. `None` means no hand.
    fn detect(&mut self, now_sec: f64) -> Option<HandLandmarkFrame>;
}

pub struct FrameScheduler {
    pub classifier: GestureClassifier,
    pub field: ParticleField,
    last_stamp: Option<f64>,
    inferences: u64,
}

impl FrameScheduler {
    pub fn new(classifier: GestureClassifier, field: ParticleField) -> Self {
        Self {
            classifier,
            field,
            last_stamp: None,
            inferences: 0,
        }
    }

    pub fn gesture(&self) -> &GestureState {
        self.classifier.state()
    }

    /// Number of inference calls made so far.
    pub fn inferences(&self) -> u64 {
        self.inferences
    }

    /// Advance one display refresh. Returns whether inference ran.
    ///
    /// The source is only queried when its frame stamp moved since the last
    /// processed tick; otherwise the classifier keeps its state untouched and
    /// the field is driven by the previous signals.
    pub fn tick(&mut self, source: Option<&mut dyn LandmarkSource>, now_sec: f64) -> bool {
        let mut inferred = false;
        if let Some(source) = source {
            if let Some(stamp) = source.frame_stamp() {
                if self.last_stamp != Some(stamp) {
                    self.last_stamp = Some(stamp);
                    let frame = source.detect(now_sec);
                    self.classifier.update(frame.as_ref());
                    self.inferences += 1;
                    inferred = true;
                }
            }
        }

        let state = self.classifier.state();
        let (scale_factor, hand_position) = (state.scale_factor, state.hand_position);
        self.field.update_positions(scale_factor, now_sec);
        self.field.update_rotation(hand_position);
        inferred
    }
}
