use crate::core::particles::{ParticleField, ShellParams};
use crate::core::torus::TorusShape;
use crate::core::{FrameInput, FrameScheduler, QualityProfile, RenderLoop, SceneState};
use crate::core::{SurfaceEffect, ViewportState};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State owned by the frame callback: the scene, the GPU, and a handle on
/// the viewport readings the input handlers keep current.
pub struct FrameContext {
    pub scene: SceneState,
    pub viewport: Rc<RefCell<ViewportState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let vp = *self.viewport.borrow();
        let input = FrameInput {
            elapsed_sec: self.started.elapsed().as_secs_f32(),
            pointer: vp.pointer,
            scroll_fraction: vp.scroll_fraction,
            aspect: vp.aspect(),
        };
        let out = self.scene.advance(&input);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&out) {
            Ok(()) if self.gpu.draws() == 1 => log::info!("[gpu] first frame presented"),
            Ok(()) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Build the scene and acquire the GPU. `None` means the 3D path is not
/// available in this browser.
pub async fn init_scene(
    canvas: &web::HtmlCanvasElement,
    viewport: Rc<RefCell<ViewportState>>,
    quality: QualityProfile,
    effect: &dyn SurfaceEffect,
) -> Option<FrameContext> {
    let field = ParticleField::generate(
        quality.particle_count,
        &ShellParams::default(),
        &mut rand::thread_rng(),
    );
    let shape = TorusShape::default();
    let gpu = match render::GpuState::new(canvas, &field, &shape, effect).await {
        Ok(g) => g,
        Err(e) => {
            log::warn!("[gpu] WebGPU init error: {:?}", e);
            return None;
        }
    };
    let scene = SceneState::new(viewport.borrow().aspect());
    for light in &scene.lights {
        log::debug!(
            "[boot] light {:?} at ({:.0},{:.0},{:.0})",
            light.kind,
            light.position.x,
            light.position.y,
            light.position.z
        );
    }
    Some(FrameContext {
        scene,
        viewport,
        canvas: canvas.clone(),
        gpu,
        started: Instant::now(),
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.callback.borrow();
        let closure = cb.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("[loop] cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Wire the frame callback to `frame_ctx` and start the loop. The returned
/// loop is what visibility changes pause and resume.
pub fn start_loop(
    window: &web::Window,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> Rc<RefCell<RenderLoop<RafScheduler>>> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let render_loop = Rc::new(RefCell::new(RenderLoop::new(RafScheduler {
        window: window.clone(),
        callback: callback.clone(),
    })));

    let loop_tick = render_loop.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let draw = loop_tick.borrow_mut().on_frame();
        if draw {
            frame_ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));

    render_loop.borrow_mut().start();
    log::info!("[loop] started state={:?}", render_loop.borrow().state());
    render_loop
}
