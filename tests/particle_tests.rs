// Host-side tests for the velocity-reactive star field.

use elements_core::constants::{DECAY_DURATION_SEC, DEFAULT_SEED};
use elements_core::*;

fn single(size: f32) -> ParticleField {
    ParticleField::from_particles(vec![Particle::new(50.0, 50.0, size, 0.06)], 0.5)
}

#[test]
fn height_and_offset_match_reference_sample() {
    let h = particle_height(1000.0, 5.0);
    assert!((h - 25.0).abs() < 1e-4, "height {h}");
    let o = particle_offset(1000.0, 5.0);
    assert!((o + 80.0).abs() < 1e-4, "offset {o}");
}

#[test]
fn backward_scroll_uses_softer_gain() {
    let o = particle_offset(-1000.0, 5.0);
    assert!((o - 60.0).abs() < 1e-4, "offset {o}");
    // stretch is symmetric
    assert_eq!(particle_height(-1000.0, 5.0), particle_height(1000.0, 5.0));
}

#[test]
fn response_saturates_at_clamp_bounds() {
    // 1500 after the size factor
    let at_bound = particle_height(1500.0, 5.0);
    assert_eq!(particle_height(1_000_000.0, 5.0), at_bound);
    assert!((at_bound - 35.0).abs() < 1e-4);
    let push_bound = particle_offset(3000.0, 5.0);
    assert_eq!(particle_offset(90_000.0, 5.0), push_bound);
}

#[test]
fn height_grows_with_speed_until_saturation() {
    let mut prev = particle_height(0.0, 3.0);
    assert_eq!(prev, 3.0);
    for v in (100..=2500).step_by(100) {
        let h = particle_height(v as f32, 3.0);
        assert!(h > prev, "height not increasing at vel {v}");
        prev = h;
    }
}

#[test]
fn offset_magnitude_grows_with_speed_until_saturation() {
    let mut prev = 0.0f32;
    for v in (500..=20_000).step_by(500) {
        let forward = particle_offset(v as f32, 1.0).abs();
        let backward = particle_offset(-(v as f32), 1.0).abs();
        assert!(forward >= prev, "offset shrank at vel {v}");
        assert!(backward <= forward);
        prev = forward;
    }
    assert!((prev - 3000.0 * 0.08).abs() < 1e-3);
}

#[test]
fn new_velocity_overwrites_without_blending() {
    let mut field = single(5.0);
    field.set_velocity(500.0, 0.0).expect("finite");
    field.tick_decay(0.1);
    field.set_velocity(-500.0, 0.12).expect("finite");
    assert_eq!(field.vel(), -500.0);
    let p = &field.particles[0];
    assert!((p.height - particle_height(-500.0, 5.0)).abs() < 1e-5);
    assert!((p.vertical_offset - particle_offset(-500.0, 5.0)).abs() < 1e-5);

    // the superseded decay must not pull toward its own curve
    field.tick_decay(0.12 + 0.25);
    let expected = -500.0 * (1.0 - Ease::Power3Out.evaluate(0.5));
    assert!((field.vel() - expected).abs() < 1e-3, "vel {}", field.vel());
}

#[test]
fn superseded_handle_goes_stale() {
    let mut field = single(2.0);
    let first = field.set_velocity(500.0, 0.0).expect("finite");
    let second = field.set_velocity(-500.0, 0.01).expect("finite");
    assert!(!field.velocity_state().is_current(first));
    assert!(field.velocity_state().is_current(second));
}

#[test]
fn decay_is_monotonic_and_reaches_zero() {
    let mut field = single(4.0);
    field.set_velocity(1200.0, 10.0).expect("finite");
    let mut prev = field.vel();
    for k in 1..=60 {
        let now = 10.0 + k as f64 * (DECAY_DURATION_SEC as f64 / 50.0);
        field.tick_decay(now);
        let v = field.vel();
        assert!(v <= prev, "decay rose {prev} -> {v}");
        prev = v;
    }
    assert_eq!(field.vel(), 0.0);
    assert!(!field.velocity_state().is_decaying());
    assert_eq!(field.particles[0].height, 4.0);
    assert_eq!(field.particles[0].vertical_offset, 0.0);
}

#[test]
fn non_finite_velocity_leaves_decay_running() {
    let mut field = single(3.0);
    field.set_velocity(900.0, 0.0).expect("finite");
    assert!(field.set_velocity(f32::NAN, 0.1).is_none());
    assert!(field.set_velocity(f32::INFINITY, 0.1).is_none());
    assert_eq!(field.vel(), 900.0);
    assert!(field.velocity_state().is_decaying());
}

#[test]
fn drift_wraps_past_right_edge() {
    let mut p = Particle::new(99.98, 10.0, 2.0, 0.05);
    p.step_drift();
    assert!((p.x_pos - 100.03).abs() < 1e-4);
    p.step_drift();
    assert_eq!(p.x_pos, -5.0);
    p.step_drift();
    assert!((p.x_pos + 4.95).abs() < 1e-4);
}

#[test]
fn generated_field_is_reproducible_and_in_range() {
    let a = ParticleField::generate(100, DEFAULT_SEED, 0.5);
    let b = ParticleField::generate(100, DEFAULT_SEED, 0.5);
    assert_eq!(a.particles, b.particles);
    for p in &a.particles {
        assert!((0.0..100.0).contains(&p.x_pos));
        assert!((0.0..100.0).contains(&p.top));
        assert!((1.0..=5.0).contains(&p.size) && p.size.fract() == 0.0);
        assert!((0.05..=0.07).contains(&p.drift));
        assert_eq!(p.height, p.size);
    }
    let c = ParticleField::generate(100, DEFAULT_SEED + 1, 0.5);
    assert_ne!(a.particles, c.particles);
}
