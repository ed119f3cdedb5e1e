// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    // The farthest particle stays inside the far plane at full scroll.
    assert!(CAMERA_BASE_DISTANCE + SCROLL_DEPTH_RANGE + PARTICLE_RADIUS_MAX < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_sane() {
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_MIN < PARTICLE_RADIUS_MAX);
    assert!(PARTICLE_COUNT_REDUCED < PARTICLE_COUNT_FULL);
    assert!(PIXEL_RATIO_CAP_REDUCED <= PIXEL_RATIO_CAP_FULL);
    assert!(TORUS_TUBE < TORUS_RADIUS);
    // Torus sits between the camera and the particle shell.
    assert!(TORUS_RADIUS + TORUS_TUBE < PARTICLE_RADIUS_MIN);
    assert!(PULSE_DEPTH < PULSE_BASE);
    for a in [PARTICLE_ALPHA, TORUS_ALPHA] {
        assert!(a > 0.0 && a <= 1.0);
    }
    for c in PARTICLE_COLOR_A
        .iter()
        .chain(&PARTICLE_COLOR_B)
        .chain(&TORUS_COLOR_A)
        .chain(&TORUS_COLOR_B)
    {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_ordered() {
    assert!(DELETE_DELAY_MS < TYPE_DELAY_MS);
    assert!(HOLD_EMPTY_MS < HOLD_FULL_MS);
    assert!(LOADER_FADE_MS < LOADER_HIDE_MS);
    assert!(NAVBAR_SCROLLED_PX < BACK_TO_TOP_PX);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(DEFAULT_FORM_ENDPOINT.starts_with("https://"));
    assert!(DEFAULT_ROLES.iter().all(|r| !r.is_empty()));
}
