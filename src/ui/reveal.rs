use crate::core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::core::reveal::RevealSet;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const INDEX_ATTR: &str = "data-reveal-index";

pub fn wire_reveal(document: &web::Document) {
    let elements = dom::query_all(document, dom::FADE_IN_SELECTOR);
    if elements.is_empty() {
        return;
    }
    for (i, el) in elements.iter().enumerate() {
        _ = el.set_attribute(INDEX_ATTR, &i.to_string());
    }
    let states = Rc::new(RefCell::new(RevealSet::new(elements.len())));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };
                let revealed = states.borrow_mut().observe(
                    index,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if revealed {
                    _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            // No observer support: show everything rather than leave it hidden.
            log::warn!("[ui] IntersectionObserver unavailable: {:?}", e);
            for el in &elements {
                _ = el.class_list().add_1("visible");
            }
        }
    }
}
