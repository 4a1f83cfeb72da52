// Scroll-progress-driven camera/rotation animation for the Earth viewer.
// Purely parametric; no time-based state. Self-contained for host tests.

use glam::Vec3;

/// Progress below which the caption label stays visible.
pub const LABEL_HIDE_AT: f32 = 0.15;
/// Progress at which the canvas begins its linear fade to transparent.
pub const FADE_START: f32 = 0.85;

/// Cubic ease-in-out: slow-fast-slow over [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Fixed start/end states interpolated by eased progress.
#[derive(Clone, Copy, Debug)]
pub struct GlobeAnimation {
    pub camera_start: Vec3,
    pub camera_end: Vec3,
    pub rotation_start: f32,
    pub rotation_end: f32,
}

impl Default for GlobeAnimation {
    fn default() -> Self {
        Self {
            // offset up and to the right of the globe, pulling in toward
            // the Hawaiian islands
            camera_start: Vec3::new(1.2, 1.7, 2.5),
            camera_end: Vec3::new(0.15, 0.45, 1.2),
            rotation_start: std::f32::consts::PI * 0.15,
            rotation_end: std::f32::consts::PI * 0.4,
        }
    }
}

/// Snapshot of everything `setZoomProgress` drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobePose {
    pub camera: Vec3,
    pub rotation_y: f32,
    pub label_visible: bool,
    pub canvas_opacity: f32,
}

impl GlobeAnimation {
    /// Evaluate the animation at `progress`, clamped to [0, 1].
    pub fn pose_at(&self, progress: f32) -> GlobePose {
        let p = progress.clamp(0.0, 1.0);
        let eased = ease_in_out_cubic(p);

        let canvas_opacity = if p > FADE_START {
            1.0 - (p - FADE_START) / (1.0 - FADE_START)
        } else {
            1.0
        };

        // weighted blend rather than a + (b - a) * t, so the endpoints are
        // reproduced exactly at eased = 0 and 1
        GlobePose {
            camera: self.camera_start * (1.0 - eased) + self.camera_end * eased,
            rotation_y: self.rotation_start * (1.0 - eased) + self.rotation_end * eased,
            label_visible: p < LABEL_HIDE_AT,
            canvas_opacity,
        }
    }
}
