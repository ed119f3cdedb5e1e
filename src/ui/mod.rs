use crate::core::SiteConfig;
use web_sys as web;

mod form;
mod nav;
mod reveal;
mod typing;

/// Wire every page behavior that does not depend on the 3D scene. Each
/// controller is independent and skips itself when its elements are absent.
pub fn wire_page_controllers(window: &web::Window, document: &web::Document, config: &SiteConfig) {
    typing::start_typing(document, config.roles.clone());
    reveal::wire_reveal(document);
    nav::wire_navigation(window, document);
    form::wire_contact_form(document, config.form_endpoint.clone());
    log::info!("[ui] controllers wired roles={}", config.roles.len());
}
