use crate::core::viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids and selectors the page is expected to provide.
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const LOADER_ID: &str = "loader";
pub const TYPING_TEXT_ID: &str = "typing-text";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_NOTICE_ID: &str = "form-notice";
pub const NAVBAR_ID: &str = "navbar";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] {} listener not attached: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    ) {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// CSS viewport size in pixels.
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Current scroll position as a fraction of the scrollable range.
pub fn scroll_fraction(window: &web::Window) -> f32 {
    let content_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, viewport_height) = inner_size(window);
    viewport::scroll_fraction(scroll_y(window), content_height, viewport_height)
}

/// Resize the canvas backing store to its CSS size times the capped device
/// pixel ratio. Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio_cap: f64) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let ratio = viewport::capped_pixel_ratio(w.device_pixel_ratio(), pixel_ratio_cap);
    let rect = canvas.get_bounding_client_rect();
    let (css_w, css_h) = if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width(), rect.height())
    } else {
        inner_size(&w)
    };
    let (w_px, h_px) = viewport::backing_size(css_w, css_h, ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Create the render canvas inside `#canvas-container`.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}
