//! Visual-side state types shared with the frontends.
//!
//! These types avoid platform-specific APIs. Renderers use them to turn the
//! field rotation into a model matrix and to build camera matrices.

use std::fmt;
use std::str::FromStr;

use glam::{EulerRot, Mat4, Vec3};

use crate::constants::DEFAULT_POINT_COLOR;
use crate::error::FieldError;

/// Orientation of the whole field: `pitch` about X, `yaw` about Y (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Rotation {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Linear RGB point colour in \[0, 1\]. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointColor(pub [f32; 3]);

impl Default for PointColor {
    fn default() -> Self {
        Self(DEFAULT_POINT_COLOR)
    }
}

impl FromStr for PointColor {
    type Err = FieldError;

    /// Parses `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || FieldError::InvalidColor(s.to_string());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let mut rgb = [0.0; 3];
        for (i, c) in rgb.iter_mut().enumerate() {
            let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            *c = byte as f32 / 255.0;
        }
        Ok(Self(rgb))
    }
}

impl fmt::Display for PointColor {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from +Z, far enough back to frame a fully
    /// expanded field.
    pub fn looking_at_field(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 30.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Combined clip-from-model transform for a rotated field.
    pub fn view_proj_model(&self, rotation: &Rotation) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * rotation.model_matrix()
    }
}
