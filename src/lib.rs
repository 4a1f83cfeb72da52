#![cfg(target_arch = "wasm32")]
//! Decorative page effects: a pointer-driven wave-ripple overlay, a
//! scroll-driven Earth zoom, and an audio-reactive volume meter. Each export
//! is an independent widget the host page constructs and drives; a widget
//! that fails to initialize logs the failure and stays disabled without ever
//! throwing into the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod constants;
mod dom;
mod frame;
mod globe;
mod wave;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web ready");
    Ok(())
}

/// Pointer-reactive ripple overlay attached to a content container.
/// Tuning setters apply until `init()`; after that the configuration is
/// fixed for the effect's lifetime.
#[wasm_bindgen]
pub struct WaveEffect {
    inner: Rc<RefCell<Option<wave::WaveOverlay>>>,
    attempted: Cell<bool>,
    cfg: RefCell<wave::sim::WaveConfig>,
    container: String,
}

#[wasm_bindgen]
impl WaveEffect {
    /// `container_selector` defaults to `.content`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_selector: Option<String>) -> WaveEffect {
        WaveEffect {
            inner: Rc::new(RefCell::new(None)),
            attempted: Cell::new(false),
            cfg: RefCell::new(wave::sim::WaveConfig::default()),
            container: container_selector.unwrap_or_else(|| ".content".to_string()),
        }
    }

    #[wasm_bindgen(js_name = setWaveSpeed)]
    pub fn set_wave_speed(&self, value: f32) {
        self.cfg.borrow_mut().wave_speed = value;
    }

    #[wasm_bindgen(js_name = setWaveDamping)]
    pub fn set_wave_damping(&self, value: f32) {
        self.cfg.borrow_mut().damping = value;
    }

    #[wasm_bindgen(js_name = setWaveForce)]
    pub fn set_wave_force(&self, value: f32) {
        self.cfg.borrow_mut().force = value;
    }

    #[wasm_bindgen(js_name = setWaveSourceSize)]
    pub fn set_wave_source_size(&self, value: f32) {
        self.cfg.borrow_mut().source_radius = value;
    }

    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&self, value: u32) {
        self.cfg.borrow_mut().grid_size = value;
    }

    #[wasm_bindgen(js_name = setSimSteps)]
    pub fn set_sim_steps(&self, value: u32) {
        self.cfg.borrow_mut().sim_steps = value;
    }

    #[wasm_bindgen(js_name = setEdgeReflect)]
    pub fn set_edge_reflect(&self, value: f32) {
        self.cfg.borrow_mut().edge_reflect = value;
    }

    #[wasm_bindgen(js_name = setEdgeBoundary)]
    pub fn set_edge_boundary(&self, value: f32) {
        self.cfg.borrow_mut().edge_boundary = value;
    }

    #[wasm_bindgen(js_name = setOpacity)]
    pub fn set_opacity(&self, value: f32) {
        self.cfg.borrow_mut().opacity = value;
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, hex: String) {
        self.cfg.borrow_mut().color = hex;
    }

    /// Attach the overlay canvas and start simulating. One attempt only; a
    /// failure leaves the effect off for the page's lifetime.
    pub fn init(&self) {
        if self.attempted.replace(true) {
            return;
        }
        let inner = self.inner.clone();
        let cfg = self.cfg.borrow().clone();
        let container = self.container.clone();
        spawn_local(async move {
            match wave::WaveOverlay::init(cfg, &container).await {
                Ok(overlay) => {
                    *inner.borrow_mut() = Some(overlay);
                    log::info!("[wave] initialized");
                }
                Err(e) => log::error!("[wave] init failed: {e:?}"),
            }
        });
    }

    pub fn destroy(&self) {
        if let Some(overlay) = self.inner.borrow_mut().take() {
            overlay.destroy();
        }
    }
}

/// Scroll-driven Earth globe. The page feeds scroll progress in [0, 1]
/// through `setZoomProgress`.
#[wasm_bindgen]
pub struct EarthViewer {
    inner: Rc<RefCell<Option<globe::GlobeViewer>>>,
    attempted: Cell<bool>,
    cfg: globe::GlobeConfig,
    progress: Rc<Cell<f32>>,
}

#[wasm_bindgen]
impl EarthViewer {
    /// All ids/paths default to the page's standard targets
    /// (`earth-canvas`, `earthScrollContainer`, `earthLabel`,
    /// `earth/textures/`).
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: Option<String>,
        container_id: Option<String>,
        label_id: Option<String>,
        textures_path: Option<String>,
    ) -> EarthViewer {
        let defaults = globe::GlobeConfig::default();
        EarthViewer {
            inner: Rc::new(RefCell::new(None)),
            attempted: Cell::new(false),
            cfg: globe::GlobeConfig {
                canvas_id: canvas_id.unwrap_or(defaults.canvas_id),
                container_id: container_id.unwrap_or(defaults.container_id),
                label_id: label_id.unwrap_or(defaults.label_id),
                textures_path: textures_path.unwrap_or(defaults.textures_path),
            },
            progress: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn init(&self) {
        if self.attempted.replace(true) {
            return;
        }
        let inner = self.inner.clone();
        let cfg = self.cfg.clone();
        let progress = self.progress.clone();
        spawn_local(async move {
            match globe::GlobeViewer::init(cfg, progress.get()).await {
                Ok(viewer) => {
                    // apply any progress the page reported while textures loaded
                    viewer.set_progress(progress.get());
                    *inner.borrow_mut() = Some(viewer);
                    log::info!("[earth] initialized");
                }
                Err(e) => log::error!("[earth] init failed: {e:?}"),
            }
        });
    }

    #[wasm_bindgen(js_name = setZoomProgress)]
    pub fn set_zoom_progress(&self, progress: f64) {
        self.progress.set(progress as f32);
        if let Some(viewer) = self.inner.borrow().as_ref() {
            viewer.set_progress(progress as f32);
        }
    }

    #[wasm_bindgen(js_name = toggleEarth)]
    pub fn toggle_earth(&self, visible: bool) {
        if let Some(viewer) = self.inner.borrow().as_ref() {
            viewer.set_earth_visible(visible);
        }
    }

    #[wasm_bindgen(js_name = toggleClouds)]
    pub fn toggle_clouds(&self, visible: bool) {
        if let Some(viewer) = self.inner.borrow().as_ref() {
            viewer.set_clouds_visible(visible);
        }
    }

    #[wasm_bindgen(js_name = toggleAtmosphere)]
    pub fn toggle_atmosphere(&self, visible: bool) {
        if let Some(viewer) = self.inner.borrow().as_ref() {
            viewer.set_atmosphere_visible(visible);
        }
    }

    pub fn destroy(&self) {
        if let Some(viewer) = self.inner.borrow_mut().take() {
            viewer.destroy();
        }
    }
}

/// Volume meter over a media element. Call `start` or `setMuted` from a user
/// gesture so the audio context is allowed to resume.
#[wasm_bindgen]
pub struct AudioVisualizer {
    inner: Rc<RefCell<Option<audio::AudioMeter>>>,
    attempted: Cell<bool>,
    media_id: String,
    bars_selector: String,
}

#[wasm_bindgen]
impl AudioVisualizer {
    /// `bars_selector` defaults to `.volume-bar`.
    #[wasm_bindgen(constructor)]
    pub fn new(media_element_id: String, bars_selector: Option<String>) -> AudioVisualizer {
        AudioVisualizer {
            inner: Rc::new(RefCell::new(None)),
            attempted: Cell::new(false),
            media_id: media_element_id,
            bars_selector: bars_selector.unwrap_or_else(|| ".volume-bar".to_string()),
        }
    }

    pub fn start(&self) {
        if self.inner.borrow().is_none() {
            if self.attempted.replace(true) {
                return;
            }
            match audio::AudioMeter::from_page(&self.media_id, &self.bars_selector) {
                Ok(meter) => {
                    *self.inner.borrow_mut() = Some(meter);
                    log::info!("[audio] initialized");
                }
                Err(e) => {
                    log::warn!("[audio] init failed: {e:?}");
                    return;
                }
            }
        }
        if let Some(meter) = self.inner.borrow().as_ref() {
            meter.start();
        }
    }

    #[wasm_bindgen(js_name = setMuted)]
    pub fn set_muted(&self, muted: bool) {
        if let Some(meter) = self.inner.borrow().as_ref() {
            meter.set_muted(muted);
        }
    }

    pub fn destroy(&self) {
        if let Some(meter) = self.inner.borrow_mut().take() {
            meter.destroy();
        }
    }
}
