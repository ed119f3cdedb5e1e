// Host-side tests for viewport readings and the quality profile.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod quality {
        include!("../src/core/quality.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use glam::Vec2;
use site::constants::*;
use site::quality::QualityProfile;
use site::viewport::*;

#[test]
fn pointer_is_centered_and_bounded() {
    assert_eq!(normalize_pointer(500.0, 400.0, 1000.0, 800.0), Vec2::ZERO);
    assert_eq!(normalize_pointer(0.0, 0.0, 1000.0, 800.0), Vec2::new(-0.5, -0.5));
    assert_eq!(
        normalize_pointer(1000.0, 800.0, 1000.0, 800.0),
        Vec2::new(0.5, 0.5)
    );
    assert_eq!(
        normalize_pointer(-300.0, 5000.0, 1000.0, 800.0),
        Vec2::new(-0.5, 0.5)
    );
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 800.0), Vec2::ZERO);
}

#[test]
fn viewport_state_tracks_size_for_pointer_mapping() {
    let mut vp = ViewportState::default();
    vp.resize(400.0, 200.0);
    vp.set_pointer_client(300.0, 50.0);
    assert_eq!(vp.pointer, Vec2::new(0.25, -0.25));
    assert_eq!(vp.aspect(), 2.0);
    vp.resize(0.0, 0.0);
    assert_eq!(vp.aspect(), 1.0);
}

#[test]
fn scroll_fraction_is_guarded_and_clamped() {
    assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(2500.0, 3000.0, 1000.0), 1.0);
    // Content no taller than the viewport.
    assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(10.0, 600.0, 800.0), 0.0);
    assert!(scroll_fraction(100.0, 3000.0, 1000.0).is_finite());
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(capped_pixel_ratio(3.0, PIXEL_RATIO_CAP_FULL), 2.0);
    assert_eq!(capped_pixel_ratio(1.5, PIXEL_RATIO_CAP_FULL), 1.5);
    assert_eq!(capped_pixel_ratio(3.0, PIXEL_RATIO_CAP_REDUCED), 1.0);
    assert_eq!(capped_pixel_ratio(0.0, PIXEL_RATIO_CAP_FULL), 1.0);
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
}

#[test]
fn constrained_devices_get_the_reduced_profile() {
    let low = QualityProfile::for_concurrency(Some(2.0));
    let high = QualityProfile::for_concurrency(Some(8.0));
    assert_eq!(low, QualityProfile::REDUCED);
    assert_eq!(high, QualityProfile::FULL);
    assert!(low.particle_count <= high.particle_count);
    assert!(low.pixel_ratio_cap <= high.pixel_ratio_cap);
    assert!(low.is_reduced());
    assert!(!high.is_reduced());

    assert_eq!(
        QualityProfile::for_concurrency(Some(CONSTRAINED_CONCURRENCY as f64)),
        QualityProfile::FULL
    );
    assert_eq!(QualityProfile::for_concurrency(None), QualityProfile::FULL);
    assert_eq!(
        QualityProfile::for_concurrency(Some(f64::NAN)),
        QualityProfile::FULL
    );
}
