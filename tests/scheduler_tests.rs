// Host-side tests for the per-refresh frame scheduler.

use field_core::landmarks::*;
use field_core::{
    ControlMode, FieldParams, FrameScheduler, GestureClassifier, LandmarkSource, ParticleField,
};
use glam::{Vec2, Vec3};
use std::collections::VecDeque;
use std::f32::consts::PI;

/// Inference stand-in that replays scripted results and counts calls.
#[derive(Default)]
struct ScriptedSource {
    stamp: Option<f64>,
    results: VecDeque<Option<HandLandmarkFrame>>,
    calls: usize,
}

impl LandmarkSource for ScriptedSource {
    fn frame_stamp(&self) -> Option<f64> {
        self.stamp
    }

    fn detect(&mut self, _now_sec: f64) -> Option<HandLandmarkFrame> {
        self.calls += 1;
        self.results.pop_front().flatten()
    }
}

fn hand_at(index: Vec2, pinch: f32) -> HandLandmarkFrame {
    let wrist = Vec3::new(0.5, 0.9, 0.0);
    let mut points = [wrist; LANDMARK_COUNT];
    points[INDEX_TIP] = index.extend(0.0);
    points[THUMB_TIP] = Vec3::new(index.x + pinch, index.y, 0.0);
    for tip in EXTENSION_TIPS {
        points[tip] = wrist - Vec3::new(0.0, 0.35, 0.0);
    }
    HandLandmarkFrame::new(points)
}

fn scheduler() -> FrameScheduler {
    FrameScheduler::new(
        GestureClassifier::default(),
        ParticleField::new(FieldParams::with_count(64), 1),
    )
}

#[test]
fn unchanged_camera_frame_is_inferred_once() {
    let mut s = scheduler();
    let mut src = ScriptedSource {
        stamp: Some(0.5),
        ..Default::default()
    };
    assert!(s.tick(Some(&mut src), 0.0));
    assert!(!s.tick(Some(&mut src), 0.016));
    assert!(!s.tick(Some(&mut src), 0.033));
    assert_eq!(src.calls, 1);

    src.stamp = Some(0.533);
    assert!(s.tick(Some(&mut src), 0.05));
    assert_eq!(src.calls, 2);
    assert_eq!(s.inferences(), 2);
}

#[test]
fn source_without_frames_is_never_called() {
    let mut s = scheduler();
    let mut src = ScriptedSource::default();
    for i in 0..5 {
        assert!(!s.tick(Some(&mut src), i as f64));
    }
    assert_eq!(src.calls, 0);
    // field still runs on defaults and auto-rotates
    assert!((s.field.rotation().yaw - 0.005).abs() < 1e-6);
}

#[test]
fn missing_tracker_degrades_to_auto_rotate() {
    let mut s = scheduler();
    for i in 0..3 {
        s.tick(None, i as f64 * 0.016);
    }
    assert_eq!(s.gesture().mode, ControlMode::Rotate);
    assert_eq!(s.gesture().scale_factor, 0.0);
    assert!((s.field.rotation().yaw - 0.003).abs() < 1e-6);
    assert_eq!(s.field.positions().len(), 64 * 3);
}

#[test]
fn classifier_runs_before_the_field_in_the_same_tick() {
    let mut s = scheduler();
    let mut src = ScriptedSource {
        stamp: Some(1.0),
        results: VecDeque::from([Some(hand_at(Vec2::new(1.0, 0.5), 0.1))]),
        ..Default::default()
    };
    s.tick(Some(&mut src), 0.0);
    assert_eq!(s.gesture().hand_position, Some(Vec2::new(1.0, 0.5)));
    assert!((s.field.rotation().yaw - (-0.2 * PI)).abs() < 1e-5);
}

#[test]
fn hand_position_persists_across_deduplicated_ticks() {
    let mut s = scheduler();
    let mut src = ScriptedSource {
        stamp: Some(1.0),
        results: VecDeque::from([Some(hand_at(Vec2::new(1.0, 0.5), 0.1))]),
        ..Default::default()
    };
    s.tick(Some(&mut src), 0.0);
    let after_first = s.field.rotation().yaw;
    s.tick(Some(&mut src), 0.016);
    // still easing toward the hand, not auto-rotating forward
    assert!(s.field.rotation().yaw < after_first);
    assert!(s.gesture().hand_position.is_some());
}

#[test]
fn lost_hand_switches_rotation_back_to_auto() {
    let mut s = scheduler();
    let mut src = ScriptedSource {
        stamp: Some(1.0),
        results: VecDeque::from([Some(hand_at(Vec2::new(0.5, 0.5), 0.1)), None]),
        ..Default::default()
    };
    s.tick(Some(&mut src), 0.0);
    src.stamp = Some(2.0);
    s.tick(Some(&mut src), 0.016);
    assert_eq!(s.gesture().hand_position, None);
    assert!((s.field.rotation().yaw - 0.001).abs() < 1e-6);
}

#[test]
fn pinch_spreads_the_field() {
    let mut s = scheduler();
    let mut src = ScriptedSource::default();
    let extent = |s: &FrameScheduler| {
        s.field
            .positions()
            .iter()
            .fold(0.0_f32, |m, v| m.max(v.abs()))
    };
    s.tick(Some(&mut src), 0.0);
    let contracted = extent(&s);
    for i in 0..60 {
        src.stamp = Some(i as f64);
        src.results.push_back(Some(hand_at(Vec2::splat(0.5), 0.01)));
        s.tick(Some(&mut src), 0.0);
    }
    assert_eq!(s.gesture().mode, ControlMode::Scale);
    assert!(s.gesture().scale_factor > 0.9);
    assert!(extent(&s) > contracted * 3.0);
}
