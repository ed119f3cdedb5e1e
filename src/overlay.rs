use crate::core::loader::LoaderPhase;
use crate::dom;
use web_sys as web;

#[inline]
pub fn apply(document: &web::Document, phase: LoaderPhase) {
    if let Some(el) = document.get_element_by_id(dom::LOADER_ID) {
        let cl = el.class_list();
        match phase {
            LoaderPhase::Shown => {
                _ = cl.remove_2("fade-out", "hidden");
                _ = el.set_attribute("style", "");
            }
            LoaderPhase::Fading => {
                _ = cl.add_1("fade-out");
            }
            LoaderPhase::Hidden => {
                _ = cl.add_2("fade-out", "hidden");
                // fallback for pages without the CSS class
                _ = el.set_attribute("style", "display:none");
            }
        }
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(dom::LOADER_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

/// Schedule the fade and hide steps. Armed before any 3D setup so the page
/// is never left behind the overlay.
pub fn arm_loader(document: &web::Document) {
    for (at_ms, phase) in LoaderPhase::schedule() {
        let doc = document.clone();
        dom::set_timeout(at_ms, move || {
            apply(&doc, phase);
            if phase == LoaderPhase::Hidden {
                log::info!("[ui] loader hidden={}", is_hidden(&doc));
            }
        });
    }
}
