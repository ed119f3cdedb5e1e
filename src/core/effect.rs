use super::constants::{
    DISPLACE_AMPLITUDE, DISPLACE_FREQUENCY, PULSE_BASE, PULSE_DEPTH, PULSE_RATE, RIM_POWER,
    RIM_STRENGTH, TORUS_ALPHA, TORUS_COLOR_A, TORUS_COLOR_B,
};
use glam::{Vec3, Vec4};

/// Values an effect feeds into the torus uniform block alongside time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectParams {
    pub color_a: Vec3,
    pub color_b: Vec3,
    pub amplitude: f32,
    pub frequency: f32,
    pub alpha: f32,
}

/// A vertex/fragment shader pair applied to the torus mesh.
///
/// The WGSL module must bind a single uniform block at group 0, binding 0
/// with the layout of the renderer's torus uniforms, and read vertex
/// attributes position (0), normal (1) and uv (2). `displace` and `shade`
/// mirror the shader math on the CPU.
pub trait SurfaceEffect {
    fn label(&self) -> &'static str;
    fn wgsl(&self) -> &'static str;
    fn vertex_entry(&self) -> &'static str {
        "vs_main"
    }
    fn fragment_entry(&self) -> &'static str {
        "fs_main"
    }
    fn params(&self) -> EffectParams;
    /// Object-space vertex position after displacement at `time` seconds.
    fn displace(&self, position: Vec3, time: f32) -> Vec3;
    /// Output color for a fragment with gradient coordinate `v` in [0, 1]
    /// and a unit view-space normal.
    fn shade(&self, v: f32, view_normal: Vec3, time: f32) -> Vec4;
}

/// Sinusoidal wobble with a vertical gradient, slow pulse and rim glow.
#[derive(Clone, Copy, Debug)]
pub struct WaveGlow {
    params: EffectParams,
}

impl Default for WaveGlow {
    fn default() -> Self {
        Self::new(EffectParams {
            color_a: Vec3::from_array(TORUS_COLOR_A),
            color_b: Vec3::from_array(TORUS_COLOR_B),
            amplitude: DISPLACE_AMPLITUDE,
            frequency: DISPLACE_FREQUENCY,
            alpha: TORUS_ALPHA,
        })
    }
}

impl WaveGlow {
    pub fn new(params: EffectParams) -> Self {
        Self { params }
    }
}

#[inline]
pub fn pulse(time: f32) -> f32 {
    PULSE_BASE + PULSE_DEPTH * (time * PULSE_RATE).sin()
}

#[inline]
pub fn rim(view_normal: Vec3) -> f32 {
    (1.0 - view_normal.dot(Vec3::Z)).max(0.0).powi(RIM_POWER)
}

impl SurfaceEffect for WaveGlow {
    fn label(&self) -> &'static str {
        "wave_glow"
    }

    fn wgsl(&self) -> &'static str {
        include_str!("../../shaders/torus.wgsl")
    }

    fn params(&self) -> EffectParams {
        self.params
    }

    fn displace(&self, position: Vec3, time: f32) -> Vec3 {
        let p = &self.params;
        Vec3::new(
            position.x + (position.y * p.frequency + time).sin() * p.amplitude,
            position.y + (position.x * p.frequency + time).cos() * p.amplitude,
            position.z,
        )
    }

    fn shade(&self, v: f32, view_normal: Vec3, time: f32) -> Vec4 {
        let base = self.params.color_a.lerp(self.params.color_b, v) * pulse(time);
        let color = base + Vec3::splat(rim(view_normal) * RIM_STRENGTH);
        color.extend(self.params.alpha)
    }
}
