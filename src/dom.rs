use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Size the canvas backing store to its CSS box times the device pixel
/// ratio, capped at `max_ratio`. Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_ratio: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(max_ratio);
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (rect.width(), rect.height())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn scroll_to_top_smooth(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn create_canvas(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_class_name(class);
    Ok(canvas)
}
