use super::constants::{
    PARTICLE_COLOR_A, PARTICLE_COLOR_B, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN,
};
use glam::Vec3;
use rand::Rng;

/// One point of the field as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Fixed-length set of colored points on concentric spherical shells.
///
/// Generated once at boot and never mutated; only the owning object's
/// rotation changes afterwards.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

/// Shell radii and endpoint colors used by [`ParticleField::generate`].
#[derive(Clone, Copy, Debug)]
pub struct ShellParams {
    pub radius_min: f32,
    pub radius_max: f32,
    pub color_a: Vec3,
    pub color_b: Vec3,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            color_a: Vec3::from_array(PARTICLE_COLOR_A),
            color_b: Vec3::from_array(PARTICLE_COLOR_B),
        }
    }
}

/// Uniform direction on the unit sphere via inverse-CDF polar sampling.
#[inline]
pub fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let u: f32 = rng.gen_range(0.0..1.0);
    let phi = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, params: &ShellParams, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = rng.gen_range(params.radius_min..=params.radius_max);
            positions.push(unit_direction(rng) * radius);
            let t: f32 = rng.gen_range(0.0..1.0);
            colors.push(params.color_a.lerp(params.color_b, t));
        }
        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleave positions and colors for a vertex buffer.
    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| ParticleVertex {
                position: p.to_array(),
                color: c.to_array(),
            })
            .collect()
    }
}
