// Host-side tests for the pure wave-simulation logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    include!("../src/wave/sim.rs");
}

use sim::*;

fn default_config() -> WaveConfig {
    WaveConfig::default()
}

#[test]
fn config_defaults_match_shipped_values() {
    let cfg = default_config();
    assert_eq!(cfg.wave_speed, 0.49);
    assert_eq!(cfg.damping, 0.996);
    assert_eq!(cfg.force, 0.30);
    assert_eq!(cfg.source_radius, 0.065);
    assert_eq!(cfg.grid_size, 1024);
    assert_eq!(cfg.sim_steps, 4);
    assert_eq!(cfg.edge_reflect, 0.1);
    assert_eq!(cfg.edge_boundary, 0.01);
    assert_eq!(cfg.opacity, 0.1);
    assert_eq!(cfg.color, "#9333ea");
}

#[test]
fn hex_color_parses_and_falls_back() {
    let purple = parse_hex_color("#9333ea");
    assert!((purple[0] - 147.0 / 255.0).abs() < 1e-6);
    assert!((purple[1] - 51.0 / 255.0).abs() < 1e-6);
    assert!((purple[2] - 234.0 / 255.0).abs() < 1e-6);

    // no hash, uppercase
    assert_eq!(parse_hex_color("FF0000"), [1.0, 0.0, 0.0]);

    // malformed input falls back to the default purple
    assert_eq!(parse_hex_color("#12"), parse_hex_color("#9333ea"));
    assert_eq!(parse_hex_color("not-a-color"), parse_hex_color("#9333ea"));
}

#[test]
fn idle_pointer_produces_no_impulse() {
    let mut tracker = PointerTracker::new(100.0, 100.0);
    // first frame has no history
    assert_eq!(tracker.take_impulse(800.0, 600.0, 0.30), None);
    // no motion since
    assert_eq!(tracker.take_impulse(800.0, 600.0, 0.30), None);
}

#[test]
fn impulse_strength_scales_with_velocity() {
    let mut tracker = PointerTracker::new(100.0, 100.0);
    tracker.take_impulse(1000.0, 500.0, 0.30);

    // 3-4-5 triangle: 50 px of motion
    tracker.set_position(130.0, 140.0);
    let imp = tracker.take_impulse(1000.0, 500.0, 0.30).expect("impulse");
    // (50 / 1000) * 0.30 * 50
    assert!((imp.strength - 0.75).abs() < 1e-5);
    assert!((imp.uv[0] - 0.13).abs() < 1e-6);
    assert!((imp.uv[1] - 0.28).abs() < 1e-6);

    // and the next frame with no further motion is quiet again
    assert_eq!(tracker.take_impulse(1000.0, 500.0, 0.30), None);
}

#[test]
fn rest_state_is_exactly_preserved() {
    let cfg = default_config();
    let mut grid = WaveGrid::new(32);
    for _ in 0..50 {
        grid.step(&cfg, None);
    }
    assert_eq!(grid.total_energy(), 0.0);
    assert_eq!(grid.max_abs(), 0.0);
}

#[test]
fn heights_stay_clamped_under_arbitrary_impulses() {
    let cfg = default_config();
    let mut grid = WaveGrid::new(32);
    let slam = PointerImpulse {
        uv: [0.5, 0.5],
        strength: 100.0,
    };
    for step in 0..60 {
        let impulse = if step % 2 == 0 { Some(slam) } else { None };
        grid.step(&cfg, impulse);
        assert!(grid.max_abs() <= 1.0, "escaped clamp at step {step}");
    }
}

#[test]
fn impulse_falloff_is_quadratic() {
    let mut cfg = default_config();
    cfg.source_radius = 0.2;
    let n = 64;
    let mut grid = WaveGrid::new(n);

    // impulse centered exactly on the texel center of cell (32, 32)
    let center_uv = (32.0 + 0.5) / n as f32;
    grid.step(
        &cfg,
        Some(PointerImpulse {
            uv: [center_uv, center_uv],
            strength: 0.5,
        }),
    );

    assert!((grid.height(32, 32) - 0.5).abs() < 1e-5);

    // two texels away: falloff (1 - d/r)^2 with d = 2/64
    let d = 2.0 / n as f32;
    let expected = 0.5 * (1.0 - d / cfg.source_radius).powi(2);
    assert!((grid.height(34, 32) - expected).abs() < 1e-5);
    assert!((grid.height(30, 32) - expected).abs() < 1e-5);
    assert!((grid.height(32, 34) - expected).abs() < 1e-5);

    // outside the radius nothing happened
    assert_eq!(grid.height(2, 2), 0.0);
}

#[test]
fn energy_decays_after_forcing_stops() {
    let mut cfg = default_config();
    // heavier damping needs a lower propagation coefficient to keep the
    // highest grid mode stable (s * 8 <= 2 * (1 + d))
    cfg.damping = 0.9;
    cfg.wave_speed = 0.3;
    cfg.edge_boundary = 0.1;
    let mut grid = WaveGrid::new(24);

    grid.step(
        &cfg,
        Some(PointerImpulse {
            uv: [0.5, 0.5],
            strength: 0.8,
        }),
    );
    let initial = grid.total_energy();
    assert!(initial > 0.0);

    let mut previous = initial;
    for window in 0..6 {
        for _ in 0..100 {
            grid.step(&cfg, None);
        }
        let now = grid.total_energy();
        assert!(now < previous, "energy rose in window {window}");
        previous = now;
    }
    assert!(grid.total_energy() < initial * 1e-2);
    assert!(grid.max_abs() < 1e-3);
}

#[test]
fn reflecting_edges_keep_more_than_absorbing_edges() {
    let mut absorbing = default_config();
    absorbing.edge_reflect = 0.0;
    absorbing.edge_boundary = 0.1;
    let mut reflecting = absorbing.clone();
    reflecting.edge_reflect = 1.0;

    // a blast wide enough to reach the boundary band
    let blast = PointerImpulse {
        uv: [0.5, 0.5],
        strength: 0.8,
    };
    absorbing.source_radius = 1.0;
    reflecting.source_radius = 1.0;

    let mut grid_a = WaveGrid::new(20);
    let mut grid_r = WaveGrid::new(20);
    grid_a.step(&absorbing, Some(blast));
    grid_r.step(&reflecting, Some(blast));

    // corner cells sit inside the boundary band
    assert!(grid_a.height(0, 0) < grid_r.height(0, 0));
    // interior cells are untouched by the edge treatment
    assert!((grid_a.height(10, 10) - grid_r.height(10, 10)).abs() < 1e-6);
}
