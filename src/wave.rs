use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::WAVE_DPR_CAP;
use crate::dom;
use crate::frame::FrameLoop;

mod gpu;
pub mod sim;

use sim::{PointerTracker, WaveConfig};

const CANVAS_CSS: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
pointer-events:none;z-index:0;mix-blend-mode:screen;";

struct WaveState {
    canvas: web::HtmlCanvasElement,
    gpu: gpu::WaveGpu<'static>,
    cfg: WaveConfig,
}

impl WaveState {
    fn frame(&mut self, tracker: &RefCell<PointerTracker>) {
        let rect = self.canvas.get_bounding_client_rect();
        let impulse = tracker.borrow_mut().take_impulse(
            rect.width() as f32,
            rect.height() as f32,
            self.cfg.force,
        );
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(impulse, self.cfg.sim_steps) {
            log::error!("[wave] render error: {:?}", e);
        }
    }
}

/// The ripple overlay: owns its canvas (auto-attached to the content
/// container), its document-level pointer listeners, and its frame loop.
pub struct WaveOverlay {
    canvas: web::HtmlCanvasElement,
    state: Rc<RefCell<WaveState>>,
    listeners: dom::ListenerSet,
    frame_loop: FrameLoop,
}

impl WaveOverlay {
    pub async fn init(cfg: WaveConfig, container_selector: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let container = document
            .query_selector(container_selector)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("container {container_selector:?} not found"))?;

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("canvas element cast failed"))?;
        canvas.set_id("wave-canvas");
        canvas.style().set_css_text(CANVAS_CSS);
        if let Some(host) = container.dyn_ref::<web::HtmlElement>() {
            _ = host.style().set_property("position", "relative");
        }
        container
            .insert_before(&canvas, container.first_child().as_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas, WAVE_DPR_CAP);

        let color = sim::parse_hex_color(&cfg.color);
        // leak a canvas clone to satisfy the surface's 'static lifetime
        let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
        let wave_gpu = gpu::WaveGpu::new(leaked_canvas, &cfg, color).await?;

        let rect = canvas.get_bounding_client_rect();
        let tracker = Rc::new(RefCell::new(PointerTracker::new(
            rect.width() as f32 / 2.0,
            rect.height() as f32 / 2.0,
        )));
        let last_client = Rc::new(Cell::new((
            rect.left() as f32 + rect.width() as f32 / 2.0,
            rect.top() as f32 + rect.height() as f32 / 2.0,
        )));

        let mut listeners = dom::ListenerSet::new();
        let reproject = {
            let canvas = canvas.clone();
            let tracker = tracker.clone();
            let last_client = last_client.clone();
            move || {
                let (cx, cy) = last_client.get();
                let rect = canvas.get_bounding_client_rect();
                tracker
                    .borrow_mut()
                    .set_position(cx - rect.left() as f32, cy - rect.top() as f32);
            }
        };

        {
            let last_client = last_client.clone();
            let reproject = reproject.clone();
            listeners.add(&document, "mousemove", move |ev| {
                if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                    last_client.set((me.client_x() as f32, me.client_y() as f32));
                    reproject();
                }
            });
        }
        {
            // the canvas moves under a stationary pointer while scrolling
            let reproject = reproject.clone();
            listeners.add(&document, "scroll", move |_ev| reproject());
        }
        for kind in ["touchstart", "touchmove"] {
            let last_client = last_client.clone();
            let reproject = reproject.clone();
            listeners.add(&document, kind, move |ev| {
                if let Some(te) = ev.dyn_ref::<web::TouchEvent>() {
                    if let Some(touch) = te.touches().get(0) {
                        last_client.set((touch.client_x() as f32, touch.client_y() as f32));
                        reproject();
                    }
                }
            });
        }
        if let Some(window) = web::window() {
            let canvas_resize = canvas.clone();
            listeners.add(&window, "resize", move |_ev| {
                dom::sync_canvas_backing_size(&canvas_resize, WAVE_DPR_CAP);
            });
        }

        let state = Rc::new(RefCell::new(WaveState {
            canvas: canvas.clone(),
            gpu: wave_gpu,
            cfg,
        }));
        let frame_loop = FrameLoop::new({
            let state = state.clone();
            let tracker = tracker.clone();
            move || state.borrow_mut().frame(&tracker)
        });
        frame_loop.start();

        Ok(Self {
            canvas,
            state,
            listeners,
            frame_loop,
        })
    }

    /// Tear everything down: loop, listeners, GPU buffers, and the injected
    /// canvas. The exported wrapper guards this with `Option::take`, so a
    /// second `destroy()` from the page is a no-op.
    pub fn destroy(self) {
        self.frame_loop.stop();
        drop(self.listeners);
        self.canvas.remove();
        drop(self.state);
    }
}
