use std::f32::consts::PI;

use glam::Vec2;

use super::draw::Vertex;
use crate::canvas::Color;

/// Filled circle as a triangle fan unrolled into a triangle list.
pub fn circle(pos: Vec2, color: Color, r: f32, res: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(3 * res);
    let a = 2.0 * PI / res as f32;

    for i in 0..res {
        let i = i as f32;
        shape.push(Vertex {
            position: pos.to_array(),
            color,
        });
        shape.push(Vertex {
            position: (pos + r * Vec2::from_angle(a * i)).to_array(),
            color,
        });
        shape.push(Vertex {
            position: (pos + r * Vec2::from_angle(a * (i + 1.0))).to_array(),
            color,
        });
    }

    shape
}

/// Outline of a circle, `width` wide and centered on radius `r`.
pub fn ring(pos: Vec2, color: Color, r: f32, width: f32, res: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(6 * res);
    let a = 2.0 * PI / res as f32;
    let inner = (r - width / 2.0).max(0.0);
    let outer = r + width / 2.0;

    for i in 0..res {
        let d0 = Vec2::from_angle(a * i as f32);
        let d1 = Vec2::from_angle(a * (i + 1) as f32);
        let quad = [
            pos + d0 * inner,
            pos + d0 * outer,
            pos + d1 * outer,
            pos + d1 * outer,
            pos + d1 * inner,
            pos + d0 * inner,
        ];
        shape.extend(quad.iter().map(|p| Vertex {
            position: p.to_array(),
            color,
        }));
    }

    shape
}

/// Straight stroke `width` wide, extended by half the width past both ends so
/// joined strokes close their corners.
pub fn line(from: Vec2, to: Vec2, color: Color, width: f32) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero() * width / 2.0;
    let side = dir.perp();
    let (from, to) = (from - dir, to + dir);

    let quad = [
        from - side,
        from + side,
        to + side,
        to + side,
        to - side,
        from - side,
    ];
    quad.iter()
        .map(|p| Vertex {
            position: p.to_array(),
            color,
        })
        .collect()
}

/// Enough segments that the edge looks round at `r` pixels.
pub fn resolution(r: f32) -> usize {
    (r * 0.75).clamp(12.0, 96.0) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(10.0, 20.0);
        let shape = circle(center, RED, 5.0, 16);
        assert_eq!(shape.len(), 48);
        for (i, v) in shape.iter().enumerate() {
            let d = Vec2::from_array(v.position).distance(center);
            let expected = if i % 3 == 0 { 0.0 } else { 5.0 };
            assert!((d - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ring_spans_line_width() {
        let shape = ring(Vec2::ZERO, RED, 10.0, 2.0, 12);
        assert_eq!(shape.len(), 72);
        for v in shape.iter() {
            let d = Vec2::from_array(v.position).length();
            assert!((9.0 - 1e-4..=11.0 + 1e-4).contains(&d));
        }
    }

    #[test]
    fn test_line_covers_stroke_width() {
        let shape = line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), RED, 2.0);
        assert_eq!(shape.len(), 6);
        for v in shape.iter() {
            let [x, y] = v.position;
            assert!((-1.0 - 1e-4..=11.0 + 1e-4).contains(&x));
            assert!((y.abs() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_resolution_bounds() {
        assert_eq!(resolution(1.0), 12);
        assert_eq!(resolution(42.0), 31);
        assert_eq!(resolution(1000.0), 96);
    }
}
