use crate::constants::{LIGHTBOX_ID, LIGHTBOX_IMAGE_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        _ = el.set_attribute("hidden", "");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains("hidden") || el.has_attribute("hidden"))
        .unwrap_or(true)
}

/// Full-screen view of one gallery image.
pub fn show_lightbox(document: &web::Document, src: &str) {
    if let Some(img) = document.get_element_by_id(LIGHTBOX_IMAGE_ID) {
        _ = img.set_attribute("src", src);
    }
    show(document, LIGHTBOX_ID);
}

pub fn hide_lightbox(document: &web::Document) {
    hide(document, LIGHTBOX_ID);
    if let Some(img) = document.get_element_by_id(LIGHTBOX_IMAGE_ID) {
        _ = img.remove_attribute("src");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// Put a message into an inline status element and reveal it.
pub fn set_message(document: &web::Document, id: &str, text: &str, tone: Tone) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
        let cl = el.class_list();
        for t in [Tone::Info, Tone::Success, Tone::Error] {
            _ = cl.remove_1(t.class());
        }
        _ = cl.add_1(tone.class());
        show(document, id);
    }
}

pub fn clear_message(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(None);
    }
    hide(document, id);
}
