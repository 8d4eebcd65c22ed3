use crate::constants::*;

/// Thresholds and smoothing used by [`crate::GestureClassifier`].
#[derive(Clone, Debug)]
pub struct GestureParams {
    pub pinch_enter: f32,
    pub pinch_exit: f32,
    pub extension_closed: f32,
    pub extension_open: f32,
    pub smoothing: f32,
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            pinch_enter: PINCH_ENTER_DISTANCE,
            pinch_exit: PINCH_EXIT_DISTANCE,
            extension_closed: EXTENSION_CLOSED,
            extension_open: EXTENSION_OPEN,
            smoothing: SMOOTHING,
        }
    }
}

/// Pixel mask and mapping for image-derived patterns.
#[derive(Clone, Debug)]
pub struct SilhouetteParams {
    pub scale: f32,
    pub sample_stride: u32,
    pub alpha_threshold: u8,
    pub brightness_threshold: f32,
    pub depth_jitter: f32,
}

impl Default for SilhouetteParams {
    fn default() -> Self {
        Self {
            scale: IMAGE_SCALE,
            sample_stride: IMAGE_SAMPLE_STRIDE,
            alpha_threshold: IMAGE_ALPHA_THRESHOLD,
            brightness_threshold: IMAGE_BRIGHTNESS_THRESHOLD,
            depth_jitter: IMAGE_DEPTH_JITTER,
        }
    }
}

/// Particle count, pattern sizes, and motion settings for [`crate::ParticleField`].
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub auto_rotate: bool,
    pub rotation_speed: f32,
    pub smoothing: f32,
    pub sphere_radius: f32,
    pub cube_size: f32,
    pub heart_scale: f32,
    pub heart_thickness: f32,
    pub galaxy_radius: f32,
    pub galaxy_thickness: f32,
    pub silhouette: SilhouetteParams,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            auto_rotate: true,
            rotation_speed: AUTO_ROTATE_SPEED,
            smoothing: SMOOTHING,
            sphere_radius: SPHERE_RADIUS,
            cube_size: CUBE_SIZE,
            heart_scale: HEART_SCALE,
            heart_thickness: HEART_THICKNESS,
            galaxy_radius: GALAXY_RADIUS,
            galaxy_thickness: GALAXY_THICKNESS,
            silhouette: SilhouetteParams::default(),
        }
    }
}

impl FieldParams {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}
