// Host-side tests for particle field generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site::constants::*;
use site::particles::*;

fn field(count: usize, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::generate(count, &ShellParams::default(), &mut rng)
}

#[test]
fn generates_exactly_the_requested_count() {
    for n in [0usize, 1, PARTICLE_COUNT_REDUCED, PARTICLE_COUNT_FULL] {
        let f = field(n, 7);
        assert_eq!(f.len(), n);
        assert_eq!(f.colors.len(), n);
        assert_eq!(f.is_empty(), n == 0);
    }
}

#[test]
fn every_position_lies_within_the_shell_radii() {
    let f = field(5000, 42);
    for p in &f.positions {
        let r = p.length();
        assert!(
            r >= PARTICLE_RADIUS_MIN - 1e-3 && r <= PARTICLE_RADIUS_MAX + 1e-3,
            "radius {r} out of bounds"
        );
    }
}

#[test]
fn every_color_is_between_the_endpoint_colors() {
    let f = field(5000, 3);
    let a = Vec3::from_array(PARTICLE_COLOR_A);
    let b = Vec3::from_array(PARTICLE_COLOR_B);
    let lo = a.min(b);
    let hi = a.max(b);
    for c in &f.colors {
        for i in 0..3 {
            assert!(
                c[i] >= lo[i] - 1e-6 && c[i] <= hi[i] + 1e-6,
                "channel {i} = {} not within [{}, {}]",
                c[i],
                lo[i],
                hi[i]
            );
        }
    }
}

#[test]
fn sampled_directions_are_unit_and_unbiased() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 20_000;
    let mut sum = Vec3::ZERO;
    for _ in 0..n {
        let d = unit_direction(&mut rng);
        assert!((d.length() - 1.0).abs() < 1e-4);
        sum += d;
    }
    let mean = sum / n as f32;
    assert!(mean.abs().max_element() < 0.03, "mean {mean:?}");

    let mut rng = StdRng::seed_from_u64(12);
    let upper_band = (0..n)
        .filter(|_| unit_direction(&mut rng).z > 0.5)
        .count() as f32
        / n as f32;
    // Uniform on the sphere: P(z > 0.5) = 0.25.
    assert!((upper_band - 0.25).abs() < 0.02, "upper band {upper_band}");
}

#[test]
fn vertices_interleave_position_and_color() {
    let f = field(16, 5);
    let v = f.vertices();
    assert_eq!(v.len(), 16);
    assert_eq!(std::mem::size_of::<ParticleVertex>(), 24);
    for (i, vert) in v.iter().enumerate() {
        assert_eq!(vert.position, f.positions[i].to_array());
        assert_eq!(vert.color, f.colors[i].to_array());
    }
}

#[test]
fn unseeded_runs_differ() {
    let a = ParticleField::generate(32, &ShellParams::default(), &mut rand::thread_rng());
    let b = ParticleField::generate(32, &ShellParams::default(), &mut rand::thread_rng());
    assert_ne!(a.positions, b.positions);
}
