// Host-side tests for the loudness → volume-bar mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod level {
    include!("../src/audio/level.rs");
}

use level::*;

#[test]
fn rms_of_silence_is_zero() {
    assert_eq!(rms(&[128; 256]), 0.0);
    assert_eq!(rms(&[]), 0.0);
}

#[test]
fn rms_of_a_square_wave_matches_its_amplitude() {
    // alternating 64/192 is a square wave with amplitude 0.5
    let samples: Vec<u8> = (0..128).map(|i| if i % 2 == 0 { 64 } else { 192 }).collect();
    assert!((rms(&samples) - 0.5).abs() < 1e-6);

    // full-scale negative rail: (0 - 128) / 128 = -1
    assert!((rms(&[0; 64]) - 1.0).abs() < 1e-6);
}

#[test]
fn bar_mapping_matches_the_tier_table() {
    assert_eq!(active_bars(0.05), 2);
    assert_eq!(active_bars(0.10), 3);
    assert_eq!(active_bars(0.25), 4);
    assert_eq!(active_bars(0.50), 5);
}

#[test]
fn bar_mapping_boundaries_land_on_the_upper_tier() {
    assert_eq!(active_bars(0.0), 2);
    assert_eq!(active_bars(0.08), 3);
    assert_eq!(active_bars(0.18), 4);
    assert_eq!(active_bars(0.35), 5);
    assert_eq!(active_bars(1.0), 5);
}

#[test]
fn meter_never_looks_idle() {
    // even dead silence lights the minimum bar count
    let silent = rms(&[128; 128]);
    assert_eq!(active_bars(silent), ACTIVE_BARS_MIN);
}

#[test]
fn synthetic_buffers_drive_the_full_range() {
    // constant-offset buffers with |v - 128| = a produce rms = a / 128
    let quiet: Vec<u8> = vec![128 + 6; 128]; // rms ≈ 0.047 → 2 bars
    let mid: Vec<u8> = vec![128 + 13; 128]; // rms ≈ 0.102 → 3 bars
    let loud: Vec<u8> = vec![128 + 32; 128]; // rms = 0.25 → 4 bars
    let peak: Vec<u8> = vec![128 + 64; 128]; // rms = 0.5 → 5 bars
    assert_eq!(active_bars(rms(&quiet)), 2);
    assert_eq!(active_bars(rms(&mid)), 3);
    assert_eq!(active_bars(rms(&loud)), 4);
    assert_eq!(active_bars(rms(&peak)), 5);
}
