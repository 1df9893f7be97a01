use super::EventListener;
use crate::core::PointerSample;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer motion inside `container`, reported as normalized samples.
/// Leaving the box reports `PointerSample::Left`.
pub fn wire_hero_pointer(
    container: &web::Element,
    on_sample: impl Fn(PointerSample) + Clone + 'static,
) -> anyhow::Result<Vec<EventListener>> {
    let target: &web::EventTarget = container.as_ref();

    let el = container.clone();
    let on_move = on_sample.clone();
    let moved = EventListener::new(target, "pointermove", move |ev: web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if let Some(sample) = PointerSample::from_client(
            me.client_x() as f64,
            me.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ) {
            on_move(sample);
        }
    })?;

    let left = EventListener::new(target, "pointerleave", move |_ev: web::Event| {
        on_sample(PointerSample::Left);
    })?;

    Ok(vec![moved, left])
}

/// Pointer position for window-level listeners. Mouse events report client
/// coordinates, touch events the first touch's page coordinates, anything
/// else (0, 0).
pub fn event_point(ev: &web::Event) -> (f64, f64) {
    if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
        return (me.client_x() as f64, me.client_y() as f64);
    }
    // TouchEvent is not defined on every desktop browser; only ask for it
    // when the event actually is one.
    if ev.type_().starts_with("touch") {
        if let Some(t) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|te| te.touches().get(0))
        {
            return (t.page_x() as f64, t.page_y() as f64);
        }
    }
    (0.0, 0.0)
}
