//! CPU-side tessellation of stroked primitives

use glam::Vec2;

use super::vertex::Vertex;
use std::f32::consts::PI;

/// Tessellate a stroked line segment as a quad of the given width.
///
/// A zero-length segment collapses to nothing, like a canvas stroke of a
/// single point with butt caps.
pub fn segment(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Tessellate a stroked circle as a thin ring band.
pub fn circle_outline(
    center: Vec2,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner_r = (radius - width / 2.0).max(0.0);
    let outer_r = radius + width / 2.0;

    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + Vec2::new(inner_r * theta1.cos(), inner_r * theta1.sin());
        let outer1 = center + Vec2::new(outer_r * theta1.cos(), outer_r * theta1.sin());
        let inner2 = center + Vec2::new(inner_r * theta2.cos(), inner_r * theta2.sin());
        let outer2 = center + Vec2::new(outer_r * theta2.cos(), outer_r * theta2.sin());

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_segment_quad_has_requested_width() {
        let verts = segment(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        // Horizontal stroke: the two edges sit one half-width above and
        // below the centerline.
        assert_eq!(verts[0].position, [0.0, 1.0]);
        assert_eq!(verts[1].position, [0.0, -1.0]);
        assert_eq!(verts[2].position, [10.0, 1.0]);
        assert_eq!(verts[5].position, [10.0, -1.0]);
    }

    #[test]
    fn test_zero_length_segment_collapses() {
        let verts = segment(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0, WHITE);
        assert!(verts.iter().all(|v| v.position == [5.0, 5.0]));
    }

    #[test]
    fn test_circle_outline_vertex_count_and_radii() {
        let verts = circle_outline(Vec2::new(3.0, 4.0), 8.0, 1.0, WHITE, 32);
        assert_eq!(verts.len(), 32 * 6);

        for v in &verts {
            let d = Vec2::new(v.position[0] - 3.0, v.position[1] - 4.0).length();
            assert!(d >= 7.5 - 1e-4 && d <= 8.5 + 1e-4);
        }
    }

    #[test]
    fn test_tiny_circle_keeps_inner_radius_positive() {
        let verts = circle_outline(Vec2::ZERO, 0.2, 1.0, WHITE, 8);
        for v in &verts {
            let d = Vec2::new(v.position[0], v.position[1]).length();
            assert!(d <= 0.7 + 1e-4);
        }
    }
}
