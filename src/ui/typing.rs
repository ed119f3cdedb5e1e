use crate::core::constants::HOLD_EMPTY_MS;
use crate::core::typing::Typewriter;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn start_typing(document: &web::Document, roles: Vec<String>) {
    let Some(el) = document.get_element_by_id(dom::TYPING_TEXT_ID) else {
        log::debug!("[ui] no #{}; typing effect off", dom::TYPING_TEXT_ID);
        return;
    };
    let Some(writer) = Typewriter::new(roles) else {
        return;
    };
    let writer = Rc::new(RefCell::new(writer));
    dom::set_timeout(HOLD_EMPTY_MS, move || step(el, writer));
}

fn step(el: web::Element, writer: Rc<RefCell<Typewriter>>) {
    let frame = writer.borrow_mut().step();
    el.set_text_content(Some(&frame.text));
    dom::set_timeout(frame.delay_ms, move || step(el, writer));
}
