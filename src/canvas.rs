//! Drawing primitives the simulation renders through.
//!
//! A `Canvas` is whatever surface the host application owns: a window, an
//! offscreen buffer or a recorder in tests. The simulator only calls into it
//! once per frame and never manages its lifetime.

use glam::Vec2;

/// RGBA color with components in `0.0..=1.0`
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// If a viewport has room to simulate in. Minimized windows report zero.
pub fn is_usable(viewport: Vec2) -> bool {
    viewport.is_finite() && viewport.min_element() > 0.0
}

pub trait Canvas {
    /// Size of the drawable area in simulation units.
    fn viewport(&self) -> Vec2;

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);

    /// Width of `text` when drawn at `font_size`.
    fn measure_text(&self, text: &str, font_size: f32) -> f32;

    /// Draws a single line of text centered on `center`.
    fn fill_text(&mut self, text: &str, center: Vec2, font_size: f32, color: Color);
}
