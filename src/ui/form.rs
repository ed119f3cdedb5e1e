use crate::core::form::{self, ButtonView, Notice, SubmitError, Submission};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_contact_form(document: &web::Document, endpoint: String) {
    let Some(form) = document
        .get_element_by_id(dom::CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[form] no #{}; contact form off", dom::CONTACT_FORM_ID);
        return;
    };
    let submission = Rc::new(RefCell::new(Submission::default()));
    let doc = document.clone();
    let form_el = form.clone();

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let Some(button) = submit_button(&form_el) else {
            log::warn!("[form] no submit button");
            return;
        };
        let Some(busy) = submission.borrow_mut().begin(&button.inner_html()) else {
            return;
        };
        apply_button(&button, &busy);

        let form = form_el.clone();
        let endpoint = endpoint.clone();
        let submission = submission.clone();
        let doc = doc.clone();
        spawn_local(async move {
            let result = post_form(&endpoint, &form).await;
            match &result {
                Ok(()) => {
                    log::info!("[form] sent");
                    form.reset();
                }
                Err(e) => log::warn!("[form] submit failed: {}", e),
            }
            let (view, notice) = submission.borrow_mut().finish(&result);
            apply_button(&button, &view);
            show_notice(&doc, &notice);
        });
    });
}

fn submit_button(form: &web::HtmlFormElement) -> Option<web::HtmlButtonElement> {
    form.query_selector("button[type=submit]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
}

fn apply_button(button: &web::HtmlButtonElement, view: &ButtonView) {
    button.set_disabled(view.disabled);
    button.set_inner_html(&view.label);
}

fn show_notice(document: &web::Document, notice: &Notice) {
    match document.get_element_by_id(dom::FORM_NOTICE_ID) {
        Some(el) => {
            el.set_text_content(Some(notice.message));
            el.set_class_name(&format!("form-notice {}", notice.css_class()));
            _ = el.set_attribute("style", "");
        }
        None => {
            if let Some(w) = web::window() {
                _ = w.alert_with_message(notice.message);
            }
        }
    }
}

#[inline]
fn transport(e: JsValue) -> SubmitError {
    SubmitError::Transport(format!("{:?}", e))
}

/// POST the form fields url-encoded; resolves once the endpoint answers.
async fn post_form(endpoint: &str, form: &web::HtmlFormElement) -> Result<(), SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Transport("no window".into()))?;
    let data = web::FormData::new_with_form(form).map_err(transport)?;
    let body = web::UrlSearchParams::new_with_str_sequence_sequence(&data).map_err(transport)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(body.to_string()));
    let request = web::Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(transport)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(transport)?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: web::Response = resp.dyn_into().map_err(transport)?;
    form::check_status(resp.status())
}
