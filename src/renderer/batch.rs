//! Per-frame stroke accumulation

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, hsla_to_rgba};
use crate::consts::CIRCLE_SEGMENTS;
use crate::sim::{Canvas, Hsla};

/// Collects one frame of simulation strokes as tessellated triangles.
///
/// This is the `Canvas` the simulation draws into; the accumulated
/// vertices are uploaded and drawn additively by `RenderState`.
pub struct StrokeBatch {
    vertices: Vec<Vertex>,
    line_width: f32,
}

impl StrokeBatch {
    pub fn new(line_width: f32) -> Self {
        Self {
            vertices: Vec::new(),
            line_width,
        }
    }

    /// Drop the previous frame's strokes, keeping the allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for StrokeBatch {
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Hsla) {
        self.vertices
            .extend_from_slice(&shapes::segment(from, to, self.line_width, hsla_to_rgba(color)));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.vertices.extend(shapes::circle_outline(
            center,
            radius,
            self.line_width,
            hsla_to_rgba(color),
            CIRCLE_SEGMENTS,
        ));
    }
}
