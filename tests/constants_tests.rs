// Host-side tests for tuning constants, defaults, and shared visual state.

use field_core::constants::*;
use field_core::{Camera, FieldError, FieldParams, GestureParams, PointColor, Rotation};
use glam::{Mat4, Vec4};

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_leave_a_dead_zone() {
    assert!(PINCH_ENTER_DISTANCE > 0.0);
    assert!(PINCH_EXIT_DISTANCE > PINCH_ENTER_DISTANCE);
    assert!(EXTENSION_OPEN > EXTENSION_CLOSED);
    assert!(SMOOTHING > 0.0 && SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pattern_sizes_are_positive() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(CUBE_SIZE > 0.0);
    assert!(HEART_SCALE > 0.0);
    assert!(GALAXY_RADIUS > 0.0);
    assert!(IMAGE_SCALE > 0.0);
    assert!(IMAGE_SAMPLE_STRIDE >= 1);
}

#[test]
fn params_default_to_the_constants() {
    let g = GestureParams::default();
    assert_eq!(g.pinch_enter, PINCH_ENTER_DISTANCE);
    assert_eq!(g.pinch_exit, PINCH_EXIT_DISTANCE);
    assert_eq!(g.smoothing, SMOOTHING);

    let f = FieldParams::default();
    assert_eq!(f.count, DEFAULT_PARTICLE_COUNT);
    assert!(f.auto_rotate);
    assert_eq!(f.rotation_speed, AUTO_ROTATE_SPEED);
    // scale and rotation settle with the same lag
    assert_eq!(f.smoothing, g.smoothing);
    assert_eq!(f.heart_thickness, HEART_THICKNESS);
    assert_eq!(f.galaxy_thickness, GALAXY_THICKNESS);
    assert_eq!(FieldParams::with_count(12).count, 12);
}

#[test]
fn hex_colours_parse_with_or_without_hash() {
    assert_eq!("#00ffff".parse::<PointColor>().unwrap(), PointColor::default());
    assert_eq!(
        "FF0000".parse::<PointColor>().unwrap(),
        PointColor([1.0, 0.0, 0.0])
    );
    for bad in ["#12345", "#gg0000", "", "#00ffff00", "#ééé"] {
        assert!(
            matches!(bad.parse::<PointColor>(), Err(FieldError::InvalidColor(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn colours_format_back_to_hex() {
    assert_eq!(PointColor::default().to_string(), "#00ffff");
    let parsed: PointColor = "#FF8000".parse().unwrap();
    assert_eq!(parsed.to_string(), "#ff8000");
}

#[test]
fn zero_rotation_is_identity() {
    assert_eq!(Rotation::default().model_matrix(), Mat4::IDENTITY);
}

#[test]
fn yaw_turns_about_the_vertical_axis() {
    let r = Rotation {
        pitch: 0.0,
        yaw: std::f32::consts::FRAC_PI_2,
    };
    let p = r.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!(p.x.abs() < 1e-6);
    assert!((p.z + 1.0).abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn camera_keeps_an_expanded_field_in_front() {
    let cam = Camera::looking_at_field(16.0 / 9.0);
    let m = cam.view_proj_model(&Rotation::default());
    let clip = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc_z = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&ndc_z));
}
