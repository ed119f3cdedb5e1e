use crate::core::nav::{self, MenuState, SectionMark};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct NavElements {
    links: Vec<web::Element>,
    hamburger: Option<web::Element>,
    menu: Option<web::Element>,
    navbar: Option<web::Element>,
    back_to_top: Option<web::Element>,
}

impl NavElements {
    fn set_menu_open(&self, open: bool) {
        if let Some(h) = &self.hamburger {
            dom::set_class(h, "active", open);
        }
        if let Some(m) = &self.menu {
            dom::set_class(m, "active", open);
        }
    }
}

pub fn wire_navigation(window: &web::Window, document: &web::Document) {
    let els = NavElements {
        links: dom::query_all(document, dom::NAV_LINK_SELECTOR),
        hamburger: dom::query(document, dom::HAMBURGER_SELECTOR),
        menu: dom::query(document, dom::NAV_LINKS_SELECTOR),
        navbar: document.get_element_by_id(dom::NAVBAR_ID),
        back_to_top: document.get_element_by_id(dom::BACK_TO_TOP_ID),
    };
    let menu = Rc::new(RefCell::new(MenuState::default()));

    wire_hamburger(&els, &menu);
    wire_link_clicks(document, &els, &menu);
    wire_back_to_top(window, &els);
    wire_scroll_highlight(window, document, els);
}

fn wire_hamburger(els: &NavElements, menu: &Rc<RefCell<MenuState>>) {
    let Some(hamburger) = els.hamburger.clone() else {
        return;
    };
    let els = els.clone();
    let menu = menu.clone();
    dom::listen(&hamburger, "click", move |_: web::MouseEvent| {
        let open = menu.borrow_mut().toggle();
        els.set_menu_open(open);
    });
}

fn wire_link_clicks(document: &web::Document, els: &NavElements, menu: &Rc<RefCell<MenuState>>) {
    for link in &els.links {
        let doc = document.clone();
        let link_el = link.clone();
        let els = els.clone();
        let menu = menu.clone();
        dom::listen(link, "click", move |ev: web::MouseEvent| {
            let href = link_el.get_attribute("href").unwrap_or_default();
            if let Some(section) = nav::anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) {
                ev.prevent_default();
                smooth_scroll_to(&section);
            }
            menu.borrow_mut().select_link();
            els.set_menu_open(false);
        });
    }
}

fn wire_back_to_top(window: &web::Window, els: &NavElements) {
    let Some(button) = els.back_to_top.clone() else {
        return;
    };
    let window = window.clone();
    dom::listen(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    });
}

fn wire_scroll_highlight(window: &web::Window, document: &web::Document, els: NavElements) {
    let update = {
        let window = window.clone();
        let document = document.clone();
        move || {
            let y = dom::scroll_y(&window);
            let sections = section_marks(&document);
            let current = nav::active_section(&sections, y);
            for link in &els.links {
                let href = link.get_attribute("href").unwrap_or_default();
                let is_active = current.is_some() && nav::anchor_target(&href) == current;
                dom::set_class(link, "active", is_active);
            }
            if let Some(bar) = &els.navbar {
                dom::set_class(bar, "scrolled", nav::navbar_scrolled(y));
            }
            if let Some(btn) = &els.back_to_top {
                dom::set_class(btn, "visible", nav::back_to_top_visible(y));
            }
        }
    };
    update();
    dom::listen(window, "scroll", move |_: web::Event| update());
}

fn section_marks(document: &web::Document) -> Vec<SectionMark> {
    dom::query_all(document, dom::SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let top = el.dyn_ref::<web::HtmlElement>()?.offset_top() as f64;
            Some(SectionMark { id: el.id(), offset_top: top })
        })
        .collect()
}

fn smooth_scroll_to(section: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}
