//! Shared view state: viewport dimensions and the pointer sentinel.
//!
//! The viewport is re-read every frame so a resize changes the orbit
//! center and drift bounds on the next frame without reinitializing any
//! particle state.

use glam::Vec2;

use crate::constants::{
    NARROW_VIEWPORT_MAX_WIDTH, ORBIT_CENTER_X_FRAC, ORBIT_CENTER_X_FRAC_NARROW,
    ORBIT_CENTER_Y_DIVISOR, POINTER_OFFSCREEN,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Narrow layouts center the orbit; wide ones push it toward the right
    /// edge so page content stays readable.
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width <= NARROW_VIEWPORT_MAX_WIDTH
    }

    /// Center of the orbit field for the current dimensions.
    pub fn orbit_center(&self) -> Vec2 {
        let x_frac = if self.is_narrow() {
            ORBIT_CENTER_X_FRAC_NARROW
        } else {
            ORBIT_CENTER_X_FRAC
        };
        Vec2::new(self.width * x_frac, self.height / ORBIT_CENTER_Y_DIVISOR)
    }
}

/// Pointer position before any pointer event has been observed: far enough
/// off-canvas that no particle is within the attraction radius.
#[inline]
pub fn offscreen_pointer() -> Vec2 {
    Vec2::splat(POINTER_OFFSCREEN)
}
