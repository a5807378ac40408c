//! Particle models and spawn functions for both field variants.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::palette::{palette_color, Rgba};
use crate::state::Viewport;

/// One orbiting particle. Its position is always derived from elapsed time
/// plus the damped reactive offset; it is never stored directly, so it
/// cannot drift from the orbital formula.
#[derive(Clone, Debug)]
pub struct Particle {
    pub base_angle: f32,
    pub base_radius: f32,
    /// Angular speed in radians per millisecond.
    pub orbit_speed: f32,
    /// Radial oscillation amplitude.
    pub amplitude: f32,
    /// Render radius of the dot.
    pub size: f32,
    /// Accumulated displacement from pointer proximity.
    pub offset: Vec2,
    /// Simulation time of the last interaction; drives the ripple ring.
    /// `NEG_INFINITY` until the particle is first touched.
    pub last_touch_ms: f64,
    pub color: Rgba,
}

impl Particle {
    /// Home position at `elapsed_ms`, before the reactive offset.
    pub fn home(&self, elapsed_ms: f64, viewport: Viewport) -> Vec2 {
        let spin = self.orbit_speed * elapsed_ms as f32;
        let angle = self.base_angle + spin;
        // sin(2t) with t in turns, expressed over radians advanced.
        let radius = self.base_radius + (spin / PI).sin() * self.amplitude;
        viewport.orbit_center() + Vec2::new(angle.cos(), angle.sin()) * radius
    }

    /// Fraction of the ripple window elapsed since the last interaction,
    /// or `None` once the window has passed (or before any interaction).
    pub fn ripple_age(&self, now_ms: f64) -> Option<f32> {
        let age = (now_ms - self.last_touch_ms) / RIPPLE_DURATION_MS;
        (0.0..1.0).contains(&age).then_some(age as f32)
    }
}

/// One free-floating particle: straight-line motion, bouncing off the
/// viewport bounds.
#[derive(Clone, Copy, Debug)]
pub struct Drifter {
    pub pos: Vec2,
    /// Velocity in px per millisecond, bounded per axis.
    pub vel: Vec2,
}

/// Generate the orbit population with randomized parameters and stable
/// palette colors by index.
pub fn spawn_orbiters(count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    let dots = (0..count)
        .map(|i| Particle {
            base_angle: rng.gen::<f32>() * TAU,
            base_radius: ORBIT_RADIUS_MIN + rng.gen::<f32>() * ORBIT_RADIUS_SPAN,
            orbit_speed: ORBIT_SPEED_MIN + rng.gen::<f32>() * ORBIT_SPEED_SPAN,
            amplitude: ORBIT_AMPLITUDE_MIN + rng.gen::<f32>() * ORBIT_AMPLITUDE_SPAN,
            size: ORBIT_DOT_SIZE_MIN + rng.gen::<f32>() * ORBIT_DOT_SIZE_SPAN,
            offset: Vec2::ZERO,
            last_touch_ms: f64::NEG_INFINITY,
            color: palette_color(i),
        })
        .collect::<Vec<_>>();
    log::debug!("spawned {} orbiters", dots.len());
    dots
}

/// Generate the drift population uniformly within the viewport.
pub fn spawn_drifters(count: usize, viewport: Viewport, rng: &mut impl Rng) -> Vec<Drifter> {
    let dots = (0..count)
        .map(|_| Drifter {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * DRIFT_SPEED_MAX,
                (rng.gen::<f32>() - 0.5) * 2.0 * DRIFT_SPEED_MAX,
            ),
        })
        .collect::<Vec<_>>();
    log::debug!("spawned {} drifters", dots.len());
    dots
}
