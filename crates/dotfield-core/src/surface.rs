//! The drawing seam between the simulation and its host surface.
//!
//! The web frontend implements this over `CanvasRenderingContext2d`;
//! tests implement it with a recording surface so draw-level properties
//! (ripple window, draw order, clear mode) are checkable natively.

use glam::Vec2;

use crate::palette::Rgba;

/// Minimal 2D drawing operations the fields need: alpha-blended rectangle
/// fills, filled circles, stroked rings, and stroked line segments.
pub trait Surface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
