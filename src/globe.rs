use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{GLOBE_DPR_CAP, VISIBILITY_THRESHOLD};
use crate::dom;
use crate::frame::FrameLoop;

pub mod anim;
pub mod mesh;
mod render;

use anim::{GlobeAnimation, GlobePose};
pub use render::LayerVisibility;

/// DOM targets and asset locations for the Earth viewer. Everything else
/// (camera path, rotation, lighting) is fixed by the animation constants.
#[derive(Clone, Debug)]
pub struct GlobeConfig {
    pub canvas_id: String,
    pub container_id: String,
    pub label_id: String,
    pub textures_path: String,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            canvas_id: "earth-canvas".to_string(),
            container_id: "earthScrollContainer".to_string(),
            label_id: "earthLabel".to_string(),
            textures_path: "earth/textures/".to_string(),
        }
    }
}

impl GlobeConfig {
    fn texture_urls(&self) -> [String; 4] {
        [
            format!("{}Albedo.jpg", self.textures_path),
            format!("{}night_lights_modified.png", self.textures_path),
            format!("{}Ocean.png", self.textures_path),
            format!("{}Clouds.png", self.textures_path),
        ]
    }
}

struct GlobeState {
    canvas: web::HtmlCanvasElement,
    label: Option<web::Element>,
    gpu: render::GlobeGpu<'static>,
    anim: GlobeAnimation,
    pose: GlobePose,
    layers: LayerVisibility,
}

impl GlobeState {
    fn frame(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self
            .gpu
            .render(self.pose.camera, self.pose.rotation_y, self.layers)
        {
            log::error!("[earth] render error: {:?}", e);
        }
    }

    /// Side effects of the current pose outside the GPU: caption visibility
    /// and the end-of-scroll canvas fade.
    fn apply_dom(&self) {
        if let Some(label) = &self.label {
            dom::set_class(label, "visible", self.pose.label_visible);
        }
        _ = self
            .canvas
            .style()
            .set_property("opacity", &self.pose.canvas_opacity.to_string());
    }
}

/// Scroll-driven Earth viewer. Rendering runs only while the scroll container
/// intersects the viewport; the pose itself is entirely progress-driven.
pub struct GlobeViewer {
    state: Rc<RefCell<GlobeState>>,
    frame_loop: Rc<FrameLoop>,
    observer: web::IntersectionObserver,
    _observer_cb: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    listeners: dom::ListenerSet,
}

impl GlobeViewer {
    pub async fn init(cfg: GlobeConfig, progress: f32) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(&cfg.canvas_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", cfg.canvas_id))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#{} is not a canvas", cfg.canvas_id))?;
        let container = document
            .get_element_by_id(&cfg.container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", cfg.container_id))?;
        let label = document.get_element_by_id(&cfg.label_id);
        if label.is_none() {
            log::warn!("[earth] label #{} not found", cfg.label_id);
        }

        dom::sync_canvas_backing_size(&canvas, GLOBE_DPR_CAP);
        let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
        let gpu = render::GlobeGpu::new(leaked_canvas, &cfg.texture_urls()).await?;

        let anim = GlobeAnimation::default();
        let state = Rc::new(RefCell::new(GlobeState {
            canvas: canvas.clone(),
            label,
            gpu,
            anim,
            pose: anim.pose_at(progress),
            layers: LayerVisibility::default(),
        }));
        state.borrow().apply_dom();

        let frame_loop = Rc::new(FrameLoop::new({
            let state = state.clone();
            move || state.borrow_mut().frame()
        }));

        // render only while the scroll container is on screen
        let observer_cb = {
            let frame_loop = frame_loop.clone();
            Closure::wrap(Box::new(
                move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            frame_loop.start();
                        } else {
                            frame_loop.stop();
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
        };
        let opts = web::IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer = web::IntersectionObserver::new_with_options(
            observer_cb.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        observer.observe(&container);

        let mut listeners = dom::ListenerSet::new();
        if let Some(window) = web::window() {
            let canvas_resize = canvas.clone();
            listeners.add(&window, "resize", move |_ev| {
                dom::sync_canvas_backing_size(&canvas_resize, GLOBE_DPR_CAP);
            });
        }

        Ok(Self {
            state,
            frame_loop,
            observer,
            _observer_cb: observer_cb,
            listeners,
        })
    }

    pub fn set_progress(&self, progress: f32) {
        let mut st = self.state.borrow_mut();
        st.pose = st.anim.pose_at(progress);
        st.apply_dom();
    }

    pub fn set_earth_visible(&self, visible: bool) {
        self.state.borrow_mut().layers.earth = visible;
    }

    pub fn set_clouds_visible(&self, visible: bool) {
        self.state.borrow_mut().layers.clouds = visible;
    }

    pub fn set_atmosphere_visible(&self, visible: bool) {
        self.state.borrow_mut().layers.atmosphere = visible;
    }

    pub fn destroy(self) {
        self.frame_loop.stop();
        self.observer.disconnect();
        drop(self.listeners);
        drop(self.state);
    }
}
