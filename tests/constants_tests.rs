// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use elements_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_mapping_constants_fit_together() {
    // lead-in (2 stops) plus one window per segment (4 stops) lands on 23
    // with the all-visible window trimmed to 1
    assert_eq!(2.0 + WINDOW_LEN * SEGMENT_COUNT as f32 + 1.0, SNAP_INC);
    assert_eq!(ALL_VISIBLE_INDEX as usize, SEGMENT_COUNT);
    assert_eq!(AFTER_LAST_INDEX, ALL_VISIBLE_INDEX + 1);
    assert_eq!(SLIDE_SELECTORS.len(), SEGMENT_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_fog_constants_are_consistent() {
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(FOG_NEAR < FOG_FAR && FOG_FAR <= CAMERA_FAR);
    // deepest transition point stays in front of the far plane
    assert!(CAMERA_Z + DEPTH_TRAVEL / 2.0 < CAMERA_FAR);
    assert!(FRUSTUM_SIZE > 2.0 * SOLID_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shell_constants_are_within_reasonable_bounds() {
    assert!(GHOST_OPACITY > 0.0 && GHOST_OPACITY <= 1.0);
    assert!(CORE_OPACITY > 0.0 && CORE_OPACITY <= 1.0);
    assert!(ALPHA_PATTERN_DARKEN >= 0.0 && ALPHA_PATTERN_DARKEN < 1.0);
    // the innermost shell of a stack is still a positive size
    assert!(1.0 - SHELL_SCALE_STEP * GHOST_SHELLS as f32 > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_RESPAWN_AT < 0.0 && PARTICLE_WRAP_AT > 0.0);
    assert!(PARTICLE_DRIFT_MIN > 0.0 && PARTICLE_DRIFT_RANDOM_SPAN >= 0.0);
    assert!(HEIGHT_CLAMP_BOUND < OFFSET_CLAMP_BOUND);
    assert!(OFFSET_GAIN_BACKWARD < OFFSET_GAIN_FORWARD);
    assert!(DECAY_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_constants_are_well_formed() {
    assert!(SNAP_IDLE_MS > 0);
    assert!(SNAP_TOLERANCE_PX >= 0.0);
    assert!(STARS_SELECTOR.starts_with('#'));
    assert!(SLIDE_SELECTORS.iter().all(|s| s.starts_with('.')));
    assert!(IMAGE_BASE_PATH.ends_with('/'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_clear_is_valid_premultiplied_and_see_through() {
    let [r, g, b, a] = CANVAS_CLEAR_RGBA;
    // premultiplied colour never exceeds its alpha
    assert!(r <= a && g <= a && b <= a);
    // stars and slides behind the canvas stay unveiled
    assert_eq!(a, 0.0);
}
