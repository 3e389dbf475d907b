//! Drawing-surface abstraction the simulation strokes through
//!
//! The simulation never touches the GPU; it emits stroke commands into a
//! `Canvas` and the renderer decides how they hit pixels. Tests record the
//! commands instead.

use glam::Vec2;

/// HSLA stroke color. Hue is in degrees (wrapped at conversion time),
/// saturation is always 100%, lightness is a percentage, alpha is 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            lightness,
            alpha,
        }
    }

    /// Fully opaque color at the given hue and lightness.
    pub fn opaque(hue: f32, lightness: f32) -> Self {
        Self::new(hue, lightness, 1.0)
    }
}

/// One frame's worth of stroke output.
pub trait Canvas {
    /// Stroke a single line segment from `from` to `to`.
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Hsla);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// Discards every stroke. Lets the simulation step headless.
pub struct NoopCanvas;

impl Canvas for NoopCanvas {
    fn stroke_segment(&mut self, _from: Vec2, _to: Vec2, _color: Hsla) {}

    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Hsla) {}
}

/// Records strokes for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub segments: Vec<(Vec2, Vec2, Hsla)>,
    pub circles: Vec<(Vec2, f32, Hsla)>,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Hsla) {
        self.segments.push((from, to, color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.circles.push((center, radius, color));
    }
}
