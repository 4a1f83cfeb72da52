use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep a canvas's backing store in sync with its CSS size, with the device
/// pixel ratio capped to keep fill rate bounded.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, dpr_cap: f64) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(dpr_cap);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Owned registry of event listeners. Every subscription a component makes
/// goes through here so `destroy()` (or drop) detaches all of them; nothing
/// is `forget()`-leaked and a second instance never double-handles events.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach {kind} listener");
        }
        self.entries.push((target.clone(), kind, closure));
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}
