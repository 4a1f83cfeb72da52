// Host-side tests for the globe's progress-driven animation curve.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod anim {
    include!("../src/globe/anim.rs");
}

use anim::*;
use glam::Vec3;

#[test]
fn easing_hits_endpoints_exactly() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
}

#[test]
fn easing_is_cubic_not_linear() {
    // first half: 4t^3
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
    // second half: 1 - (-2t + 2)^3 / 2
    assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-6);
    // midpoint is shared by both branches
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn easing_is_monotonic() {
    let mut last = 0.0;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let e = ease_in_out_cubic(t);
        assert!(e >= last, "dipped at t = {t}");
        last = e;
    }
}

#[test]
fn pose_endpoints_are_exact() {
    let anim = GlobeAnimation::default();

    let start = anim.pose_at(0.0);
    assert_eq!(start.camera, anim.camera_start);
    assert_eq!(start.rotation_y, anim.rotation_start);

    let end = anim.pose_at(1.0);
    assert_eq!(end.camera, anim.camera_end);
    assert_eq!(end.rotation_y, anim.rotation_end);
}

#[test]
fn interior_pose_uses_the_eased_blend() {
    let anim = GlobeAnimation::default();
    let pose = anim.pose_at(0.25);

    let eased = anim.camera_start.lerp(anim.camera_end, 0.0625);
    let linear = anim.camera_start.lerp(anim.camera_end, 0.25);
    assert!(pose.camera.distance(eased) < 1e-5);
    assert!(pose.camera.distance(linear) > 1e-3);

    let expected_rot = anim.rotation_start + (anim.rotation_end - anim.rotation_start) * 0.0625;
    assert!((pose.rotation_y - expected_rot).abs() < 1e-6);
}

#[test]
fn label_visibility_boundary() {
    let anim = GlobeAnimation::default();
    for p in [0.0, 0.05, 0.149] {
        assert!(anim.pose_at(p).label_visible, "label hidden at {p}");
    }
    for p in [0.15, 0.2, 0.5, 1.0] {
        assert!(!anim.pose_at(p).label_visible, "label visible at {p}");
    }
}

#[test]
fn canvas_fade_is_linear_after_085() {
    let anim = GlobeAnimation::default();
    for p in [0.0, 0.5, 0.85] {
        assert_eq!(anim.pose_at(p).canvas_opacity, 1.0);
    }
    assert!((anim.pose_at(0.9).canvas_opacity - (1.0 - 0.05 / 0.15)).abs() < 1e-5);
    assert!((anim.pose_at(0.925).canvas_opacity - 0.5).abs() < 1e-5);
    assert!(anim.pose_at(1.0).canvas_opacity.abs() < 1e-6);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let anim = GlobeAnimation::default();
    assert_eq!(anim.pose_at(-1.0), anim.pose_at(0.0));
    assert_eq!(anim.pose_at(2.0), anim.pose_at(1.0));
}

#[test]
fn camera_path_pulls_in() {
    let anim = GlobeAnimation::default();
    assert!(anim.camera_end.length() < anim.camera_start.length());
    assert_eq!(anim.camera_start, Vec3::new(1.2, 1.7, 2.5));
    assert_eq!(anim.camera_end, Vec3::new(0.15, 0.45, 1.2));
}
