use std::path::PathBuf;

use clap::Parser;
use field_core::{FieldParams, PointColor, AUTO_ROTATE_SPEED, DEFAULT_PARTICLE_COUNT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hand-gesture driven particle field", long_about = None)]
pub struct Cli {
    /// Number of particles in the field
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    pub count: usize,

    /// RNG seed for pattern generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image to build a silhouette pattern from (key 5)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Point colour as #rrggbb
    #[arg(long, default_value = "#00ffff")]
    pub color: PointColor,

    /// Start with auto-rotation disabled
    #[arg(long)]
    pub no_auto_rotate: bool,

    /// Auto-rotation increment in radians per frame
    #[arg(long, default_value_t = AUTO_ROTATE_SPEED)]
    pub rotation_speed: f32,
}

impl Cli {
    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            count: self.count,
            auto_rotate: !self.no_auto_rotate,
            rotation_speed: self.rotation_speed,
            ..FieldParams::default()
        }
    }
}
