//! Field tuning constants.
//!
//! Rates that were per-frame fractions in earlier drafts are normalized
//! against a 60 fps reference frame so the simulation advances by measured
//! elapsed time and looks the same at any refresh rate.

/// Reference frame length used to normalize per-frame rates (60 fps).
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

// Population sizes. Fixed for the lifetime of one mount.
pub const ORBIT_DOT_COUNT: usize = 60;
pub const DRIFT_DOT_COUNT: usize = 40;

// Orbit parameter bands, sampled uniformly at spawn.
pub const ORBIT_RADIUS_MIN: f32 = 100.0;
pub const ORBIT_RADIUS_SPAN: f32 = 40.0;
// Angular speed in radians per millisecond, equivalent to 0.001..0.0015
// turns per reference frame.
pub const ORBIT_SPEED_MIN: f32 = 0.000_377;
pub const ORBIT_SPEED_SPAN: f32 = 0.000_189;
pub const ORBIT_AMPLITUDE_MIN: f32 = 10.0;
pub const ORBIT_AMPLITUDE_SPAN: f32 = 10.0;
pub const ORBIT_DOT_SIZE_MIN: f32 = 1.5;
pub const ORBIT_DOT_SIZE_SPAN: f32 = 1.5;

// Pointer reaction.
pub const ATTRACT_RADIUS: f32 = 100.0;
/// Fraction of the pointer vector applied per reference frame while inside
/// the attraction radius (exponential approach, never a snap).
pub const ATTRACT_STEP_FRAC: f32 = 0.02;
/// Fraction of the reactive offset shed per reference frame once the
/// pointer is out of range (exponential return to orbit).
pub const RELEASE_DECAY_FRAC: f32 = 0.05;
/// Sentinel pointer coordinate before any pointer event has been observed.
pub const POINTER_OFFSCREEN: f32 = -9999.0;

// Ripple rings.
pub const RIPPLE_DURATION_MS: f64 = 1000.0;
pub const RIPPLE_MAX_RADIUS: f32 = 120.0;
pub const RIPPLE_RING_WIDTH: f32 = 2.0;
pub const RIPPLE_RING_ALPHA: f32 = 0.13;

// Ambient pulse: idle "life" without pointer input.
pub const AMBIENT_PULSE_INTERVAL_MS: f64 = 3000.0;
pub const AMBIENT_PULSE_STRIDE: usize = 15;

// Connectivity links, orbit layer.
pub const ORBIT_LINK_MAX_DIST: f32 = 120.0;
pub const ORBIT_LINK_ALPHA_SCALE: f32 = 0.4;
pub const ORBIT_LINK_WIDTH: f32 = 0.6;
pub const LINK_GLOW_RADIUS: f32 = 150.0;
pub const LINK_GLOW_BONUS: f32 = 0.4;

// Connectivity links, drift layer.
pub const DRIFT_LINK_MAX_DIST: f32 = 150.0;
pub const DRIFT_LINK_WIDTH: f32 = 0.5;

// Drift layer dots.
pub const DRIFT_DOT_RADIUS: f32 = 3.0;
pub const DRIFT_DOT_ALPHA: f32 = 0.8;
/// Velocity bound per axis in px/ms (0.6 px per reference frame).
pub const DRIFT_SPEED_MAX: f32 = 0.036;

/// Alpha of the black overlay painted each orbit frame (motion trails).
pub const TRAIL_FADE_ALPHA: f32 = 0.07;

// Orbit center placement within the viewport.
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 600.0;
pub const ORBIT_CENTER_X_FRAC: f32 = 0.85;
pub const ORBIT_CENTER_X_FRAC_NARROW: f32 = 0.5;
pub const ORBIT_CENTER_Y_DIVISOR: f32 = 2.8;
