use crate::core::RenderLoop;
use crate::dom;
use crate::frame::RafScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Cancel the frame loop while the page is hidden and re-arm it on return.
pub fn wire_visibility(document: &web::Document, render_loop: Rc<RefCell<RenderLoop<RafScheduler>>>) {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        let visible = !doc.hidden();
        let mut lp = render_loop.borrow_mut();
        lp.set_page_visible(visible);
        log::info!(
            "[loop] visible={} state={:?} ticks={}",
            visible,
            lp.state(),
            lp.ticks()
        );
    });
}
