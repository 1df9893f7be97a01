//! Document-level delegated listeners. Views are re-rendered on every
//! navigation, so handlers hang off the document and look at the target.

use super::EventListener;
use crate::constants::{FORM_ID, LIGHTBOX_ID};
use crate::core::PageStore;
use crate::{form, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

pub fn wire_document(
    document: &web::Document,
    store: Rc<RefCell<PageStore>>,
) -> anyhow::Result<Vec<EventListener>> {
    let target: &web::EventTarget = document.as_ref();

    let doc = document.clone();
    let click = EventListener::new(target, "click", move |ev: web::Event| {
        let Some(el) = target_element(&ev) else {
            return;
        };
        if let Ok(Some(nav)) = el.closest("[data-nav]") {
            if let Some(id) = nav.get_attribute("data-nav") {
                ev.prevent_default();
                log::info!("[nav] -> {}", id);
                store.borrow_mut().navigate_id(&id);
            }
            return;
        }
        if let Some(src) = el.get_attribute("data-lightbox") {
            overlay::show_lightbox(&doc, &src);
            return;
        }
        if let Ok(Some(_)) = el.closest(&format!("#{}", LIGHTBOX_ID)) {
            overlay::hide_lightbox(&doc);
        }
    })?;

    let doc = document.clone();
    let submit = EventListener::new(target, "submit", move |ev: web::Event| {
        let Some(form_el) = target_element(&ev)
            .filter(|el| el.id() == FORM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
        else {
            return;
        };
        ev.prevent_default();
        form::handle_submit(&doc, &form_el);
    })?;

    let doc = document.clone();
    let keydown = EventListener::new(target, "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if kev.key() == "Escape" && !overlay::is_hidden(&doc, LIGHTBOX_ID) {
            overlay::hide_lightbox(&doc);
        }
    })?;

    Ok(vec![click, submit, keydown])
}
