/// Cross-cutting tuning constants for the page effects.
///
/// Component-specific defaults live on their config structs; these are the
/// shared renderer and analyser parameters.
// Device-pixel-ratio caps (the wave overlay tolerates more, the globe is
// fill-rate heavy)
pub const WAVE_DPR_CAP: f64 = 2.0;
pub const GLOBE_DPR_CAP: f64 = 1.5;

// Globe camera projection
pub const FOV_Y_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.01;
pub const Z_FAR: f32 = 100.0;

// Sun: a directional light shining from this position toward the origin
pub const SUN_POSITION: [f32; 3] = [-50.0, 0.0, 30.0];
pub const SUN_INTENSITY: f32 = 1.3;

// Layer radii relative to the earth sphere
pub const EARTH_RADIUS: f32 = 1.0;
pub const CLOUD_RADIUS_RATIO: f32 = 1.005;
pub const ATMOSPHERE_RADIUS_RATIO: f32 = 1.25;

// Sphere tessellation (segments per axis)
pub const SPHERE_SEGMENTS: u32 = 64;

// Atmosphere rim-glow shading
pub const ATMOSPHERE_OPACITY: f32 = 0.7;
pub const ATMOSPHERE_POW_FACTOR: f32 = 4.1;
pub const ATMOSPHERE_MULTIPLIER: f32 = 9.5;

// Warm tint applied to the night-lights emissive texture
pub const NIGHT_LIGHTS_TINT: [f32; 3] = [1.0, 1.0, 0.533];

// Fraction of the globe container that must intersect the viewport before
// the render loop runs
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Audio analyser setup
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// Output gain when the meter is unmuted (analysis gain is always unity)
pub const UNMUTED_GAIN: f32 = 0.4;
