// Shared tuning constants for the gesture classifier and the particle field.

// Field layout
pub const DEFAULT_PARTICLE_COUNT: usize = 8000;
pub const DEFAULT_SEED: u64 = 42;

// Gesture: pinch hysteresis (normalized image units)
pub const PINCH_ENTER_DISTANCE: f32 = 0.03; // latch Scale below this
pub const PINCH_EXIT_DISTANCE: f32 = 0.06; // release back to Rotate above this

// Gesture: finger extension mapped onto the scale factor
pub const EXTENSION_CLOSED: f32 = 0.15; // closed fist, wrist to fingertip
pub const EXTENSION_OPEN: f32 = 0.35; // fully open hand

// First-order smoothing shared by the scale factor and the field rotation
pub const SMOOTHING: f32 = 0.1;

// Field expansion and noise driven by the scale factor
pub const EXPANSION_BASE: f32 = 0.5; // contracted size at scale 0
pub const EXPANSION_SPAN: f32 = 3.5; // added size at scale 1
pub const NOISE_AMPLITUDE: f32 = 2.0;

// Rotation mapping from the normalized hand position
pub const YAW_RANGE: f32 = 4.0 * std::f32::consts::PI;
pub const PITCH_RANGE: f32 = 2.0 * std::f32::consts::PI;
pub const AUTO_ROTATE_SPEED: f32 = 0.001; // radians per frame

// Pattern sizes
pub const SPHERE_RADIUS: f32 = 10.0;
pub const CUBE_SIZE: f32 = 15.0;
pub const HEART_SCALE: f32 = 1.0;
pub const HEART_THICKNESS: f32 = 5.0;
pub const GALAXY_RADIUS: f32 = 10.0;
pub const GALAXY_THICKNESS: f32 = 2.0;

// Image silhouettes
pub const IMAGE_SCALE: f32 = 0.1; // world units per pixel
pub const IMAGE_SAMPLE_STRIDE: u32 = 2; // scan every n-th pixel on both axes
pub const IMAGE_ALPHA_THRESHOLD: u8 = 128;
pub const IMAGE_BRIGHTNESS_THRESHOLD: f32 = 50.0;
pub const IMAGE_DEPTH_JITTER: f32 = 2.0;

// Cosmetic defaults
pub const DEFAULT_POINT_COLOR: [f32; 3] = [0.0, 1.0, 1.0]; // #00ffff
