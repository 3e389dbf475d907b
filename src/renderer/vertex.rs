//! Vertex type and stroke color conversion

use bytemuck::{Pod, Zeroable};

use crate::sim::Hsla;

/// 2D vertex in surface coordinates with an sRGB-space RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert a fully-saturated HSLA stroke color to RGBA.
///
/// The result stays in sRGB space; blending happens there to match how a
/// 2D canvas composites, and the blit pass linearizes at the very end.
pub fn hsla_to_rgba(color: Hsla) -> [f32; 4] {
    let h = color.hue.rem_euclid(360.0);
    let l = (color.lightness / 100.0).clamp(0.0, 1.0);

    let c = 1.0 - (2.0 * l - 1.0).abs();
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, color.alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(
            hsla_to_rgba(Hsla::opaque(0.0, 50.0)),
            [1.0, 0.0, 0.0, 1.0]
        ));
        assert!(close(
            hsla_to_rgba(Hsla::opaque(120.0, 50.0)),
            [0.0, 1.0, 0.0, 1.0]
        ));
        assert!(close(
            hsla_to_rgba(Hsla::opaque(240.0, 50.0)),
            [0.0, 0.0, 1.0, 1.0]
        ));
    }

    #[test]
    fn test_lightness_extremes() {
        assert!(close(
            hsla_to_rgba(Hsla::opaque(37.0, 100.0)),
            [1.0, 1.0, 1.0, 1.0]
        ));
        assert!(close(
            hsla_to_rgba(Hsla::opaque(283.0, 0.0)),
            [0.0, 0.0, 0.0, 1.0]
        ));
    }

    #[test]
    fn test_hue_wraps_and_alpha_passes_through() {
        let wrapped = hsla_to_rgba(Hsla::new(480.0, 50.0, 0.25));
        let green = hsla_to_rgba(Hsla::new(120.0, 50.0, 0.25));
        assert!(close(wrapped, green));
        assert_eq!(wrapped[3], 0.25);
    }
}
