use crate::core::constants::{CLEAR_COLOR, PARTICLE_ALPHA};
use crate::core::effect::{EffectParams, SurfaceEffect};
use crate::core::particles::ParticleField;
use crate::core::torus::TorusShape;
use crate::core::FrameOutput;
use web_sys as web;

mod helpers;
mod particles;
mod targets;
mod torus;

use particles::{create_particle_resources, ParticleResources, ParticleUniforms};
use targets::DepthTarget;
use torus::{create_torus_resources, TorusResources, TorusUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    particles: ParticleResources,
    torus: TorusResources,
    effect: EffectParams,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    draws: u64,
}

impl GpuState {
    /// Acquire a WebGPU device for `canvas` and upload the static scene.
    /// Fails when the browser has no usable adapter.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        field: &ParticleField,
        shape: &TorusShape,
        effect: &dyn SurfaceEffect,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let particles = create_particle_resources(&device, format, field);
        let torus = create_torus_resources(&device, format, shape, effect);
        log::info!(
            "[gpu] ready format={:?} size={}x{} particles={} torus_indices={} effect={}",
            format,
            width,
            height,
            particles.vertex_count,
            torus.index_count,
            effect.label()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            particles,
            torus,
            effect: effect.params(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            draws: 0,
        })
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn write_uniforms(&self, frame: &FrameOutput) {
        let p = ParticleUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.particle_model.to_cols_array_2d(),
            alpha: PARTICLE_ALPHA,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&p));

        let t = TorusUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            model: frame.torus_model.to_cols_array_2d(),
            color_a: self.effect.color_a.extend(1.0).to_array(),
            color_b: self.effect.color_b.extend(1.0).to_array(),
            time: frame.time,
            alpha: self.effect.alpha,
            amplitude: self.effect.amplitude,
            frequency: self.effect.frequency,
        };
        self.queue
            .write_buffer(&self.torus.uniform_buffer, 0, bytemuck::bytes_of(&t));
    }

    /// Encode and submit one frame: particles, then the translucent torus.
    pub fn render(&mut self, frame: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        self.draws += 1;
        self.write_uniforms(frame);
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.vertex_buffer.slice(..));
            rpass.draw(0..self.particles.vertex_count, 0..1);

            rpass.set_pipeline(&self.torus.pipeline);
            rpass.set_bind_group(0, &self.torus.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.torus.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.torus.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.torus.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
