//! Canvas particle hero: soft gradient circles composited with "lighten".

use crate::constants::PARTICLE_COUNT;
use crate::core::{ParticleField, Viewport};
use crate::dom::{self, js_err};
use crate::events::{pointer, EventListener};
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParticleState {
    field: ParticleField,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl ParticleState {
    /// Match the canvas to the viewport and scatter a new population.
    fn reset(&mut self, window: &web::Window) {
        let (w, h) = dom::viewport_size(window);
        self.canvas.set_width(w.max(0.0) as u32);
        self.canvas.set_height(h.max(0.0) as u32);
        // Resizing the canvas resets context state.
        _ = self.ctx.set_global_composite_operation("lighten");
        self.field.repopulate(
            Viewport {
                width: w,
                height: h,
            },
            &mut rand::thread_rng(),
        );
    }

    fn frame(&mut self) {
        let vp = self.field.viewport;
        self.ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
        self.field.step();
        for p in &self.field.particles {
            if let Err(e) = draw_particle(&self.ctx, &p.gradient(vp), p.pos.x, p.pos.y, p.radius) {
                log::warn!("[particles] draw failed: {:?}", e);
                return;
            }
        }
    }
}

fn draw_particle(
    ctx: &web::CanvasRenderingContext2d,
    g: &crate::core::GradientSpec,
    x: f64,
    y: f64,
    r: f64,
) -> Result<(), wasm_bindgen::JsValue> {
    let grad = ctx.create_radial_gradient(
        g.inner[0], g.inner[1], g.inner[2], g.outer[0], g.outer[1], g.outer[2],
    )?;
    for (offset, color) in &g.stops {
        grad.add_color_stop(*offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

/// A mounted particle hero. Dropping it cancels the loop and removes every
/// window listener, then the canvas.
pub struct ParticleHero {
    raf: AnimationLoop,
    listeners: Vec<EventListener>,
    canvas: web::HtmlCanvasElement,
}

impl ParticleHero {
    pub fn mount(container: &web::Element) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("container is detached"))?;
        let canvas = dom::create_canvas(&document, "particle-canvas")?;
        container.append_child(&canvas).map_err(js_err)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let (w, h) = dom::viewport_size(&window);
        let viewport = Viewport {
            width: w,
            height: h,
        };
        let state = Rc::new(RefCell::new(ParticleState {
            field: ParticleField::new(PARTICLE_COUNT, viewport, &mut rand::thread_rng()),
            canvas: canvas.clone(),
            ctx,
        }));
        state.borrow_mut().reset(&window);

        let target: &web::EventTarget = window.as_ref();
        let mut listeners = Vec::with_capacity(4);
        for name in ["mousemove", "touchstart", "touchmove"] {
            let state = state.clone();
            listeners.push(EventListener::passive(target, name, move |ev: web::Event| {
                let (x, y) = pointer::event_point(&ev);
                state.borrow_mut().field.set_pointer(x, y);
            })?);
        }
        {
            let state = state.clone();
            let window = window.clone();
            listeners.push(EventListener::new(target, "resize", move |_ev: web::Event| {
                state.borrow_mut().reset(&window);
            })?);
        }

        let raf = {
            let state = state.clone();
            AnimationLoop::start(move || state.borrow_mut().frame())
        };
        log::info!("[particles] mounted {} particles", PARTICLE_COUNT);
        Ok(Self {
            raf,
            listeners,
            canvas,
        })
    }
}

impl Drop for ParticleHero {
    fn drop(&mut self) {
        self.raf.cancel();
        self.listeners.clear();
        self.canvas.remove();
        log::info!("[particles] unmounted");
    }
}
