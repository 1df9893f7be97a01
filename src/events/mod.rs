//! DOM listener ownership.
//!
//! Every listener the app attaches is held by a guard; dropping the guard
//! detaches it. Renderers keep their guards in a single struct so teardown is
//! just dropping them in reverse order of acquisition.

use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod clicks;
pub mod pointer;

pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Same as `new` but registered as passive; the handler can't prevent
    /// default.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Resize notifications for one element.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe(
        element: &web::Element,
        mut on_resize: impl FnMut(f64, f64) + 'static,
    ) -> anyhow::Result<Self> {
        let el = element.clone();
        let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            let rect = el.get_bounding_client_rect();
            on_resize(rect.width(), rect.height());
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref()).map_err(js_err)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
