use super::helpers;
use crate::core::effect::SurfaceEffect;
use crate::core::torus::{TorusShape, TorusVertex};
use wgpu;
use wgpu::util::DeviceExt;

/// Uniform block shared by every torus effect shader.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TorusUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color_a: [f32; 4],
    pub(crate) color_b: [f32; 4],
    pub(crate) time: f32,
    pub(crate) alpha: f32,
    pub(crate) amplitude: f32,
    pub(crate) frequency: f32,
}

pub(crate) struct TorusResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

const TORUS_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

pub(crate) fn create_torus_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    shape: &TorusShape,
    effect: &dyn SurfaceEffect,
) -> TorusResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(effect.label()),
        source: wgpu::ShaderSource::Wgsl(effect.wgsl().into()),
    });
    let bgl = helpers::uniform_layout(device, "torus_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("torus_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("torus_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(effect.vertex_entry()),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<TorusVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &TORUS_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Double-sided: both faces of the ring are visible through the alpha.
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state()),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(effect.fragment_entry()),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let mesh = shape.build();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("torus_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("torus_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = helpers::uniform_buffer::<TorusUniforms>(device, "torus_uniforms");
    let bind_group = helpers::uniform_bind_group(device, "torus_bg", &bgl, &uniform_buffer);

    TorusResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
