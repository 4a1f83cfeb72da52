use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame loop as an explicit {stopped, running} state
/// machine. The callback is built once; while running it re-requests itself,
/// and `stop()` both flips the flag and cancels any in-flight request, so the
/// loop can be restarted cleanly any number of times (the globe's visibility
/// gate toggles it constantly).
pub struct FrameLoop {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let active = Rc::new(Cell::new(false));
        let raf_id = Rc::new(Cell::new(0));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let active_in_tick = active.clone();
        let raf_in_tick = raf_id.clone();
        let tick_in_tick = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_in_tick.set(0);
            if !active_in_tick.get() {
                return;
            }
            frame();
            if active_in_tick.get() {
                request_frame(&tick_in_tick, &raf_in_tick);
            }
        }) as Box<dyn FnMut()>));

        Self {
            active,
            raf_id,
            tick,
        }
    }

    pub fn start(&self) {
        if !self.active.replace(true) {
            request_frame(&self.tick, &self.raf_id);
        }
    }

    pub fn stop(&self) {
        self.active.set(false);
        let id = self.raf_id.replace(0);
        if id != 0 {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, raf_id: &Rc<Cell<i32>>) {
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }
}
