//! The two field variants and their per-frame update/draw cycles.
//!
//! `OrbitField` is the pointer-reactive layer: particles orbit a viewport-
//! derived center, get pulled toward a nearby pointer, ripple on touch,
//! and are linked by proximity edges over a fading trail. `DriftField` is
//! the simpler backdrop: free-floating particles bouncing off the bounds
//! with plain proximity links over a hard clear.
//!
//! Both advance by measured elapsed milliseconds, so apparent speed is
//! independent of the display refresh rate.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::links::{proximity_links, LinkParams, PointerGlow};
use crate::palette::{Rgba, BLACK, WHITE};
use crate::particle::{spawn_drifters, spawn_orbiters, Drifter, Particle};
use crate::state::Viewport;
use crate::surface::Surface;

/// Snapshot of one particle as the renderer sees it this frame.
#[derive(Clone, Copy, Debug)]
pub struct FieldDot {
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
    /// Ripple window fraction, when a ring should be drawn.
    pub ripple: Option<f32>,
}

/// Fraction of the pointer vector to apply this frame (exponential
/// approach toward the pointer, never an instantaneous snap).
#[inline]
fn attract_alpha(dt_ms: f64) -> f32 {
    1.0 - (1.0 - ATTRACT_STEP_FRAC).powf((dt_ms / REFERENCE_FRAME_MS) as f32)
}

/// Fraction of the reactive offset retained this frame once the pointer is
/// out of range. Multiplicative, so split steps compose exactly.
#[inline]
fn release_keep(dt_ms: f64) -> f32 {
    (1.0 - RELEASE_DECAY_FRAC).powf((dt_ms / REFERENCE_FRAME_MS) as f32)
}

pub struct OrbitField {
    pub particles: Vec<Particle>,
    elapsed_ms: f64,
    last_pulse_ms: f64,
}

impl OrbitField {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_particles(spawn_orbiters(ORBIT_DOT_COUNT, rng))
    }

    /// Build from an explicit population (fixed-parameter setups in tests).
    pub fn with_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            elapsed_ms: 0.0,
            last_pulse_ms: 0.0,
        }
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Advance the simulation by `dt_ms`.
    ///
    /// Inside the attraction radius the reactive offset is nudged toward
    /// the pointer and the particle's interaction timestamp refreshes at
    /// most once per ripple window; outside it the offset decays back
    /// toward the orbit. Independently, every pulse interval a fixed
    /// index-stride subset is touched so the field stays alive when idle.
    pub fn step(&mut self, dt_ms: f64, pointer: Vec2, viewport: Viewport) {
        self.elapsed_ms += dt_ms;
        let now = self.elapsed_ms;

        let pulse = now - self.last_pulse_ms >= AMBIENT_PULSE_INTERVAL_MS;
        if pulse {
            self.last_pulse_ms = now;
        }

        let attract = attract_alpha(dt_ms);
        let release = release_keep(dt_ms);
        for (i, p) in self.particles.iter_mut().enumerate() {
            let home = p.home(now, viewport);
            let to_pointer = pointer - (home + p.offset);
            if to_pointer.length() < ATTRACT_RADIUS {
                p.offset += to_pointer * attract;
                if now - p.last_touch_ms > RIPPLE_DURATION_MS {
                    p.last_touch_ms = now;
                }
            } else {
                p.offset *= release;
            }
            if pulse && i % AMBIENT_PULSE_STRIDE == 0 {
                p.last_touch_ms = now;
            }
        }
    }

    /// Render snapshot: home + reactive offset per particle.
    pub fn dots(&self, viewport: Viewport) -> Vec<FieldDot> {
        self.particles
            .iter()
            .map(|p| FieldDot {
                pos: p.home(self.elapsed_ms, viewport) + p.offset,
                size: p.size,
                color: p.color,
                ripple: p.ripple_age(self.elapsed_ms),
            })
            .collect()
    }

    /// Draw one frame: trail fade, ripple rings, dots, then links.
    pub fn draw(&self, surface: &mut impl Surface, pointer: Vec2, viewport: Viewport) {
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            BLACK.with_alpha(TRAIL_FADE_ALPHA),
        );

        let dots = self.dots(viewport);
        for d in &dots {
            if let Some(age) = d.ripple {
                surface.stroke_circle(
                    d.pos,
                    age * RIPPLE_MAX_RADIUS,
                    RIPPLE_RING_WIDTH,
                    d.color.with_alpha(RIPPLE_RING_ALPHA),
                );
            }
        }
        for d in &dots {
            surface.fill_circle(d.pos, d.size, WHITE);
        }

        let positions: Vec<Vec2> = dots.iter().map(|d| d.pos).collect();
        let params = LinkParams {
            max_dist: ORBIT_LINK_MAX_DIST,
            alpha_scale: ORBIT_LINK_ALPHA_SCALE,
            glow: Some(PointerGlow {
                pos: pointer,
                radius: LINK_GLOW_RADIUS,
                bonus: LINK_GLOW_BONUS,
            }),
        };
        for link in proximity_links(&positions, &params) {
            surface.stroke_line(
                positions[link.a],
                positions[link.b],
                ORBIT_LINK_WIDTH,
                WHITE.with_alpha(link.alpha),
            );
        }
    }
}

pub struct DriftField {
    pub dots: Vec<Drifter>,
}

impl DriftField {
    pub fn new(viewport: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            dots: spawn_drifters(DRIFT_DOT_COUNT, viewport, rng),
        }
    }

    pub fn with_dots(dots: Vec<Drifter>) -> Self {
        Self { dots }
    }

    /// Integrate positions and reflect velocity at the bounds.
    ///
    /// A component only flips when it is still carrying the dot outward,
    /// so each boundary crossing flips it exactly once and a dot left
    /// outside by a resize heads back in instead of jittering at the edge.
    pub fn step(&mut self, dt_ms: f64, viewport: Viewport) {
        let dt = dt_ms as f32;
        for d in &mut self.dots {
            d.pos += d.vel * dt;
            if (d.pos.x <= 0.0 && d.vel.x < 0.0) || (d.pos.x >= viewport.width && d.vel.x > 0.0) {
                d.vel.x = -d.vel.x;
            }
            if (d.pos.y <= 0.0 && d.vel.y < 0.0) || (d.pos.y >= viewport.height && d.vel.y > 0.0) {
                d.vel.y = -d.vel.y;
            }
        }
    }

    /// Draw one frame: opaque clear, dots, then links.
    pub fn draw(&self, surface: &mut impl Surface, viewport: Viewport) {
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            BLACK,
        );
        for d in &self.dots {
            surface.fill_circle(d.pos, DRIFT_DOT_RADIUS, WHITE.with_alpha(DRIFT_DOT_ALPHA));
        }

        let positions: Vec<Vec2> = self.dots.iter().map(|d| d.pos).collect();
        let params = LinkParams {
            max_dist: DRIFT_LINK_MAX_DIST,
            alpha_scale: 1.0,
            glow: None,
        };
        for link in proximity_links(&positions, &params) {
            surface.stroke_line(
                positions[link.a],
                positions[link.b],
                DRIFT_LINK_WIDTH,
                WHITE.with_alpha(link.alpha),
            );
        }
    }
}

/// Either field variant behind one step/draw surface, so the frame loop
/// does not care which layer it is driving.
pub enum Field {
    Orbit(OrbitField),
    Drift(DriftField),
}

impl Field {
    pub fn step(&mut self, dt_ms: f64, pointer: Vec2, viewport: Viewport) {
        match self {
            Field::Orbit(f) => f.step(dt_ms, pointer, viewport),
            Field::Drift(f) => f.step(dt_ms, viewport),
        }
    }

    pub fn draw(&self, surface: &mut impl Surface, pointer: Vec2, viewport: Viewport) {
        match self {
            Field::Orbit(f) => f.draw(surface, pointer, viewport),
            Field::Drift(f) => f.draw(surface, viewport),
        }
    }
}
