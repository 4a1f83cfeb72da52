use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING, UNMUTED_GAIN};
use crate::dom;
use crate::frame::FrameLoop;

pub mod level;

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => Err(anyhow::anyhow!("{label} GainNode error: {:?}", e)),
    }
}

struct MeterState {
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
    bars: Vec<web::Element>,
}

impl MeterState {
    fn frame(&mut self) {
        self.analyser.get_byte_time_domain_data(&mut self.buf);
        let loudness = level::rms(&self.buf);
        let active = level::active_bars(loudness);
        for (i, bar) in self.bars.iter().enumerate() {
            dom::set_class(bar, "active", i < active);
        }
    }
}

/// Volume meter over a media element's output. The element is tapped
/// source → analyser → gain → destination, so analysis keeps running while
/// muting only zeroes the output gain.
pub struct AudioMeter {
    ctx: web::AudioContext,
    gain: web::GainNode,
    state: Rc<RefCell<MeterState>>,
    frame_loop: FrameLoop,
}

impl AudioMeter {
    /// Build the meter from page element ids/selectors.
    pub fn from_page(media_id: &str, bars_selector: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let media: web::HtmlMediaElement = document
            .get_element_by_id(media_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{media_id}"))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#{media_id} is not a media element"))?;
        let list = document
            .query_selector_all(bars_selector)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut bars = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    bars.push(el);
                }
            }
        }
        if bars.is_empty() {
            log::warn!("[audio] no bar elements match {bars_selector:?}");
        }
        Self::init(media, bars)
    }

    pub fn init(media: web::HtmlMediaElement, bars: Vec<web::Element>) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        let analyser = web::AnalyserNode::new(&ctx).map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);

        // output starts muted; analysis gain is unity regardless
        let gain = create_gain(&ctx, 0.0, "output")?;

        let source = ctx
            .create_media_element_source(&media)
            .map_err(|e| anyhow::anyhow!("media element source: {:?}", e))?;
        _ = source.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());

        let buf = vec![0u8; analyser.frequency_bin_count() as usize];

        // the gain node owns the output level from here on
        media.set_muted(false);

        let state = Rc::new(RefCell::new(MeterState {
            analyser,
            buf,
            bars,
        }));
        let frame_loop = FrameLoop::new({
            let state = state.clone();
            move || state.borrow_mut().frame()
        });

        Ok(Self {
            ctx,
            gain,
            state,
            frame_loop,
        })
    }

    fn resume_if_suspended(&self) {
        // browsers keep the context suspended until a user gesture
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn start(&self) {
        self.resume_if_suspended();
        self.frame_loop.start();
    }

    pub fn set_muted(&self, muted: bool) {
        self.resume_if_suspended();
        self.gain
            .gain()
            .set_value(if muted { 0.0 } else { UNMUTED_GAIN });
    }

    pub fn destroy(self) {
        self.frame_loop.stop();
        _ = self.ctx.close();
        drop(self.state);
    }
}
