pub mod constants;
pub mod error;
pub mod field;
pub mod gesture;
pub mod landmarks;
pub mod params;
pub mod pattern;
pub mod scheduler;
pub mod state;

pub use constants::*;
pub use error::{FieldError, Result};
pub use field::{resample, ImageTicket, ParticleField};
pub use gesture::{ControlMode, GestureClassifier, GestureState};
pub use landmarks::HandLandmarkFrame;
pub use params::{FieldParams, GestureParams, SilhouetteParams};
pub use pattern::Pattern;
pub use scheduler::{FrameScheduler, LandmarkSource};
pub use state::{Camera, PointColor, Rotation};
