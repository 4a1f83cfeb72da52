// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod level {
    include!("../src/audio/level.rs");
}

use constants::*;
use level::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_constants_are_within_reasonable_bounds() {
    assert!(WAVE_DPR_CAP >= 1.0);
    assert!(GLOBE_DPR_CAP >= 1.0);

    assert!(FOV_Y_DEG > 0.0 && FOV_Y_DEG < 180.0);
    assert!(Z_NEAR > 0.0);
    assert!(Z_FAR > Z_NEAR);

    assert!(SUN_INTENSITY > 0.0);
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn globe_layers_nest_outward() {
    assert!(EARTH_RADIUS > 0.0);
    assert!(CLOUD_RADIUS_RATIO > 1.0);
    assert!(ATMOSPHERE_RADIUS_RATIO > CLOUD_RADIUS_RATIO);

    // the whole stack must fit inside the camera frustum
    assert!(EARTH_RADIUS * ATMOSPHERE_RADIUS_RATIO < Z_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn atmosphere_shading_terms_are_positive() {
    assert!(ATMOSPHERE_OPACITY > 0.0 && ATMOSPHERE_OPACITY <= 1.0);
    assert!(ATMOSPHERE_POW_FACTOR > 0.0);
    assert!(ATMOSPHERE_MULTIPLIER > 0.0);
    assert!(SPHERE_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_constants_match_webaudio_requirements() {
    // fftSize must be a power of two within [32, 32768]
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert!((0.0..=1.0).contains(&ANALYSER_SMOOTHING));
    assert!(UNMUTED_GAIN > 0.0 && UNMUTED_GAIN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loudness_tiers_ascend() {
    assert!(RMS_TIER_QUIET > 0.0);
    assert!(RMS_TIER_QUIET < RMS_TIER_LOUD);
    assert!(RMS_TIER_LOUD < RMS_TIER_PEAK);
    assert!(RMS_TIER_PEAK < 1.0);
    assert!(ACTIVE_BARS_MIN < ACTIVE_BARS_MAX);
}
