use crate::core::ViewportState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub viewport: Rc<RefCell<ViewportState>>,
    pub pixel_ratio_cap: f64,
}

pub fn wire_input_handlers(w: InputWiring) {
    {
        let (width, height) = dom::inner_size(&w.window);
        let mut vp = w.viewport.borrow_mut();
        vp.resize(width, height);
        vp.scroll_fraction = dom::scroll_fraction(&w.window);
    }
    dom::sync_canvas_backing_size(&w.canvas, w.pixel_ratio_cap);

    wire_pointermove(&w);
    wire_touchmove(&w);
    wire_resize(&w);
    wire_scroll(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let viewport = w.viewport.clone();
    dom::listen(&w.window, "pointermove", move |ev: web::PointerEvent| {
        viewport
            .borrow_mut()
            .set_pointer_client(ev.client_x() as f64, ev.client_y() as f64);
    });
}

fn wire_touchmove(w: &InputWiring) {
    let viewport = w.viewport.clone();
    dom::listen(&w.window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            viewport
                .borrow_mut()
                .set_pointer_client(touch.client_x() as f64, touch.client_y() as f64);
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let wiring = w.clone();
    dom::listen(&w.window, "resize", move |_: web::Event| {
        let (width, height) = dom::inner_size(&wiring.window);
        wiring.viewport.borrow_mut().resize(width, height);
        // The surface and depth target follow the canvas on the next frame.
        let (px_w, px_h) = dom::sync_canvas_backing_size(&wiring.canvas, wiring.pixel_ratio_cap);
        log::debug!("[input] resize css={}x{} px={}x{}", width, height, px_w, px_h);
    });
}

fn wire_scroll(w: &InputWiring) {
    let window = w.window.clone();
    let viewport = w.viewport.clone();
    dom::listen(&w.window, "scroll", move |_: web::Event| {
        viewport.borrow_mut().scroll_fraction = dom::scroll_fraction(&window);
    });
}
