use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame loop that runs until cancelled or dropped.
///
/// The frame callback owns the renderer state it needs; cancelling drops the
/// callback and with it that state. `cancel` must not be called from inside
/// the frame callback itself.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let tick_next = tick.clone();
        let handle_next = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame();
            // Cancelled while this frame was queued.
            if handle_next.get().is_none() {
                return;
            }
            handle_next.set(request_frame(&tick_next));
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        Self { handle, tick }
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference so it and its captures drop.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
        .ok()
}
