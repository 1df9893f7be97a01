//! Image distortion hero: a WebGPU canvas sampling an image through the
//! displacement field, driven by pointer motion over the container.

use crate::constants::MAX_PIXEL_RATIO;
use crate::core::{CursorState, DisplacementField, DistortionParams, PointerSample, Projection};
use crate::dom::{self, js_err};
use crate::events::{pointer, EventListener, ResizeWatch};
use crate::frame::AnimationLoop;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct DistortionState {
    params: DistortionParams,
    field: DisplacementField,
    cursor: CursorState,
    gpu: Option<GpuState>,
    canvas: web::HtmlCanvasElement,
    image: web::HtmlImageElement,
    /// Latest container size from the observer, applied on the next frame.
    pending_size: Option<(f64, f64)>,
}

impl DistortionState {
    fn frame(&mut self) {
        if let Some((w, h)) = self.pending_size.take() {
            self.apply_resize(w, h);
        }
        let cursor = self.cursor;
        self.cursor = cursor.consume_velocity();
        if let Err(e) = self.field.step(&cursor, &self.params) {
            log::warn!("[distortion] frame skipped: {}", e);
            return;
        }
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if !gpu.has_image() && self.image.complete() && self.image.natural_width() > 0 {
            gpu.upload_image(&self.image);
        }
        gpu.write_field(&self.field);
        if let Err(e) = gpu.render() {
            log::error!("render error: {:?}", e);
        }
    }

    fn apply_resize(&mut self, css_w: f64, css_h: f64) {
        let Some(projection) = Projection::for_size(css_w as f32, css_h as f32) else {
            return;
        };
        dom::sync_canvas_backing_size(&self.canvas, MAX_PIXEL_RATIO);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            gpu.set_projection(&projection);
        }
    }

    fn release(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.release();
        }
        self.field.release();
        self.image.set_src("");
    }
}

/// A mounted distortion hero. Dropping it tears everything down in reverse
/// order of acquisition: frame loop, resize observer, pointer listeners, GPU
/// resources and field, then the canvas element.
pub struct DistortionHero {
    raf: AnimationLoop,
    resize: ResizeWatch,
    listeners: Vec<EventListener>,
    state: Rc<RefCell<DistortionState>>,
    canvas: web::HtmlCanvasElement,
}

impl DistortionHero {
    pub async fn mount(
        container: &web::Element,
        image_src: &str,
        params: DistortionParams,
    ) -> anyhow::Result<Self> {
        params.validate()?;
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("container is detached"))?;

        let field = DisplacementField::seeded(params.grid as usize, &mut rand::thread_rng())?;

        let canvas = dom::create_canvas(&document, "hero-canvas")?;
        container.append_child(&canvas).map_err(js_err)?;
        dom::sync_canvas_backing_size(&canvas, MAX_PIXEL_RATIO);
        let gpu = match GpuState::new(&canvas, params.grid).await {
            Ok(g) => g,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };

        let image = web::HtmlImageElement::new().map_err(js_err)?;
        image.set_cross_origin(Some("anonymous"));
        image.set_src(image_src);

        let state = Rc::new(RefCell::new(DistortionState {
            params,
            field,
            cursor: CursorState::default(),
            gpu: Some(gpu),
            canvas: canvas.clone(),
            image,
            pending_size: None,
        }));

        let on_sample = {
            let state = state.clone();
            move |sample: PointerSample| {
                let mut s = state.borrow_mut();
                s.cursor = s.cursor.apply(sample);
            }
        };
        let listeners = pointer::wire_hero_pointer(container, on_sample)?;

        let resize = {
            let state = state.clone();
            ResizeWatch::observe(container, move |w, h| {
                state.borrow_mut().pending_size = Some((w, h));
            })?
        };
        let rect = container.get_bounding_client_rect();
        state.borrow_mut().pending_size = Some((rect.width(), rect.height()));

        let raf = {
            let state = state.clone();
            AnimationLoop::start(move || state.borrow_mut().frame())
        };

        log::info!(
            "[distortion] mounted grid={} mouse={} strength={} relaxation={}",
            params.grid,
            params.mouse,
            params.strength,
            params.relaxation
        );
        Ok(Self {
            raf,
            resize,
            listeners,
            state,
            canvas,
        })
    }
}

impl Drop for DistortionHero {
    fn drop(&mut self) {
        self.raf.cancel();
        self.resize.disconnect();
        self.listeners.clear();
        self.state.borrow_mut().release();
        self.canvas.remove();
        log::info!("[distortion] unmounted");
    }
}
