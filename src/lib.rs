#![cfg(target_arch = "wasm32")]
use crate::core::{QualityProfile, SiteConfig, ViewportState, WaveGlow};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn read_config(document: &web::Document) -> SiteConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    SiteConfig::with_overrides(
        attr("data-roles").as_deref(),
        attr("data-form-endpoint").as_deref(),
    )
}

fn read_quality(window: &web::Window) -> QualityProfile {
    let cores = window.navigator().hardware_concurrency();
    let quality = QualityProfile::for_concurrency(Some(cores));
    log::info!(
        "[boot] cores={} particles={} pixel_cap={}",
        cores,
        quality.particle_count,
        quality.pixel_ratio_cap
    );
    quality
}

/// `navigator.gpu` is the browser's signal that WebGPU can be requested.
fn webgpu_present(window: &web::Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu")).unwrap_or(false)
}

fn enter_ui_only(document: &web::Document, reason: &str) {
    log::warn!("[boot] 3D background unavailable ({}); UI only", reason);
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("no-3d");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The page controllers and loader never wait on the 3D path.
    overlay::arm_loader(&document);
    let config = read_config(&document);
    ui::wire_page_controllers(&window, &document, &config);

    if !webgpu_present(&window) {
        enter_ui_only(&document, "no navigator.gpu");
        return Ok(());
    }
    let canvas = match dom::create_canvas(&document) {
        Ok(c) => c,
        Err(e) => {
            enter_ui_only(&document, &e.to_string());
            return Ok(());
        }
    };

    let quality = read_quality(&window);
    let viewport = Rc::new(RefCell::new(ViewportState::default()));
    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        viewport: viewport.clone(),
        pixel_ratio_cap: quality.pixel_ratio_cap,
    });

    let effect = WaveGlow::default();
    let Some(frame_ctx) = frame::init_scene(&canvas, viewport, quality, &effect).await else {
        canvas.remove();
        enter_ui_only(&document, "no WebGPU adapter");
        return Ok(());
    };

    let render_loop = frame::start_loop(&window, Rc::new(RefCell::new(frame_ctx)));
    if document.hidden() {
        render_loop.borrow_mut().stop();
    }
    events::wire_visibility(&document, render_loop);
    Ok(())
}
