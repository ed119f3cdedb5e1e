// Host-side tests for camera follow and per-frame scene animation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use glam::{Vec2, Vec3, Vec4};
use site::camera::Camera;
use site::constants::*;
use site::scene::*;
use site::viewport::*;

fn input(elapsed_sec: f32, pointer: Vec2, scroll_fraction: f32) -> FrameInput {
    FrameInput {
        elapsed_sec,
        pointer,
        scroll_fraction,
        aspect: 16.0 / 9.0,
    }
}

#[test]
fn orientation_eases_geometrically_toward_target() {
    let mut cam = Camera::new(1.0);
    let target = Camera::target_orientation(Vec2::new(0.5, -0.25));
    assert!(target.abs_diff_eq(Vec2::new(-0.5, 1.0), 1e-6));

    let mut prev_gap = (target - cam.orientation).length();
    for k in 1..=60 {
        cam.ease_toward(target);
        let gap = (target - cam.orientation).length();
        assert!(gap < prev_gap, "gap grew at step {k}");
        let expected = (1.0 - CAMERA_EASE).powi(k) * target.length();
        assert!((gap - expected).abs() < 1e-4, "step {k}: {gap} vs {expected}");
        prev_gap = gap;
    }
}

#[test]
fn halfway_scroll_pushes_camera_back_half_the_range() {
    let f = scroll_fraction(1000.0, 3000.0, 1000.0);
    assert!((f - 0.5).abs() < 1e-6);
    let depth = Camera::depth_for_scroll(f);
    assert!((depth - (CAMERA_BASE_DISTANCE + SCROLL_DEPTH_RANGE * 0.5)).abs() < 1e-5);

    let mut scene = SceneState::new(1.0);
    scene.advance(&input(0.016, Vec2::ZERO, f));
    assert!((scene.camera.depth - 35.0).abs() < 1e-5);
}

#[test]
fn depth_is_clamped_to_the_scroll_range() {
    assert_eq!(Camera::depth_for_scroll(-1.0), CAMERA_BASE_DISTANCE);
    assert_eq!(
        Camera::depth_for_scroll(4.0),
        CAMERA_BASE_DISTANCE + SCROLL_DEPTH_RANGE
    );
}

#[test]
fn each_tick_spins_both_objects_by_fixed_increments() {
    let mut scene = SceneState::new(1.0);
    for i in 0..10 {
        scene.advance(&input(i as f32 / 60.0, Vec2::ZERO, 0.0));
    }
    let p = scene.particle_rotation;
    assert!((p.x - 10.0 * PARTICLE_SPIN[0]).abs() < 1e-6);
    assert!((p.y - 10.0 * PARTICLE_SPIN[1]).abs() < 1e-6);
    assert_eq!(p.z, 0.0);
    let expected = Vec3::from_array(TORUS_SPIN) * 10.0;
    assert!(scene.torus_rotation.abs_diff_eq(expected, 1e-6));
}

#[test]
fn frame_time_never_goes_backwards() {
    let mut scene = SceneState::new(1.0);
    let a = scene.advance(&input(2.0, Vec2::ZERO, 0.0));
    let b = scene.advance(&input(1.5, Vec2::ZERO, 0.0));
    assert_eq!(a.time, 2.0);
    assert_eq!(b.time, 2.0);
}

#[test]
fn resting_camera_looks_down_negative_z_from_depth() {
    let cam = Camera::new(1.0);
    let view = cam.view_matrix();
    let eye_in_view = view * Vec4::new(0.0, 0.0, CAMERA_BASE_DISTANCE, 1.0);
    assert!(eye_in_view.truncate().abs_diff_eq(Vec3::ZERO, 1e-4));
    let origin_in_view = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin_in_view.z + CAMERA_BASE_DISTANCE).abs() < 1e-4);
}

#[test]
fn bad_aspect_falls_back_to_square() {
    let mut cam = Camera::new(0.0);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(2.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn scene_carries_the_four_static_lights() {
    let scene = SceneState::new(1.0);
    let kinds: Vec<LightKind> = scene.lights.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LightKind::Ambient,
            LightKind::Point,
            LightKind::Point,
            LightKind::Spot
        ]
    );
    assert_eq!(scene.lights[1].position, Vec3::new(20.0, 20.0, 20.0));
    assert_eq!(scene.lights[2].position, Vec3::new(-20.0, -20.0, 20.0));
    assert_eq!(scene.lights[3].position, Vec3::new(0.0, 50.0, 0.0));
}
