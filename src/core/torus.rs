use super::constants::{TORUS_RADIAL_SEGMENTS, TORUS_RADIUS, TORUS_TUBE, TORUS_TUBULAR_SEGMENTS};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TorusVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Ring dimensions. `radius` is the distance from the center to the middle
/// of the tube; `tube` is the tube radius.
#[derive(Clone, Copy, Debug)]
pub struct TorusShape {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
}

impl Default for TorusShape {
    fn default() -> Self {
        Self {
            radius: TORUS_RADIUS,
            tube: TORUS_TUBE,
            radial_segments: TORUS_RADIAL_SEGMENTS,
            tubular_segments: TORUS_TUBULAR_SEGMENTS,
        }
    }
}

pub struct TorusMesh {
    pub vertices: Vec<TorusVertex>,
    pub indices: Vec<u32>,
}

impl TorusShape {
    pub fn vertex_count(&self) -> usize {
        ((self.radial_segments + 1) * (self.tubular_segments + 1)) as usize
    }

    pub fn index_count(&self) -> usize {
        (self.radial_segments * self.tubular_segments * 6) as usize
    }

    /// Build the ring in the XY plane. Seam rows and columns are duplicated
    /// so that UVs run the full 0..1 range on both axes.
    pub fn build(&self) -> TorusMesh {
        let radial = self.radial_segments.max(3);
        let tubular = self.tubular_segments.max(3);
        let shape = TorusShape {
            radial_segments: radial,
            tubular_segments: tubular,
            ..*self
        };
        let mut vertices = Vec::with_capacity(shape.vertex_count());
        for j in 0..=radial {
            let v = j as f32 / radial as f32;
            let tube_angle = v * std::f32::consts::TAU;
            for i in 0..=tubular {
                let u = i as f32 / tubular as f32;
                let ring_angle = u * std::f32::consts::TAU;
                let ring = self.radius + self.tube * tube_angle.cos();
                let position = Vec3::new(
                    ring * ring_angle.cos(),
                    ring * ring_angle.sin(),
                    self.tube * tube_angle.sin(),
                );
                let center = Vec3::new(
                    self.radius * ring_angle.cos(),
                    self.radius * ring_angle.sin(),
                    0.0,
                );
                let normal = (position - center).normalize_or_zero();
                vertices.push(TorusVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [u, v],
                });
            }
        }

        let stride = tubular + 1;
        let mut indices = Vec::with_capacity(shape.index_count());
        for j in 1..=radial {
            for i in 1..=tubular {
                let a = stride * j + i - 1;
                let b = stride * (j - 1) + i - 1;
                let c = stride * (j - 1) + i;
                let d = stride * j + i;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        TorusMesh { vertices, indices }
    }
}
