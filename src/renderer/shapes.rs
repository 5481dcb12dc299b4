//! Triangle generation for recorded shapes

use glam::Vec2;
use std::f32::consts::PI;

use super::canvas::{Color, Rect, Shape};
use super::vertex::Vertex;

/// Segments used for every ellipse; enough for a 60px body to look round
pub const ELLIPSE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled ellipse inscribed in `bounds`
pub fn ellipse(bounds: Rect, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let center = bounds.center();
    let radii = bounds.size() / 2.0;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle
pub fn rect(bounds: Rect, color: Color) -> Vec<Vertex> {
    let Rect {
        left,
        top,
        right,
        bottom,
    } = bounds;

    vec![
        Vertex::new(left, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, bottom, color),
    ]
}

/// Generate vertices for a convex polygon as a fan from its first point
pub fn polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let first = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

/// Triangulate shapes in draw order (later shapes paint over earlier ones)
pub fn tessellate(shapes: &[Shape]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Ellipse { bounds, color } => {
                vertices.extend(ellipse(*bounds, *color, ELLIPSE_SEGMENTS))
            }
            Shape::Rect { bounds, color } => vertices.extend(rect(*bounds, *color)),
            Shape::Polygon { points, color } => vertices.extend(polygon(points, *color)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_ellipse_stays_in_bounds() {
        let bounds = Rect::new(10.0, 20.0, 70.0, 40.0);
        let vertices = ellipse(bounds, RED, 16);
        assert_eq!(vertices.len(), 16 * 3);
        for v in &vertices {
            assert!(v.position[0] >= 10.0 - 1e-3 && v.position[0] <= 70.0 + 1e-3);
            assert!(v.position[1] >= 20.0 - 1e-3 && v.position[1] <= 40.0 + 1e-3);
        }
        // Every triangle starts at the center
        assert_eq!(vertices[0].position, [40.0, 30.0]);
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let vertices = rect(Rect::new(0.0, 0.0, 10.0, 5.0), RED);
        assert_eq!(vertices.len(), 6);
        assert!(vertices.iter().all(|v| v.color == RED));
    }

    #[test]
    fn test_polygon_fan() {
        let quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(polygon(&quad, RED).len(), 6);
        assert!(polygon(&quad[..2], RED).is_empty());
    }

    #[test]
    fn test_tessellate_keeps_draw_order() {
        let shapes = [
            Shape::Rect {
                bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
                color: RED,
            },
            Shape::Ellipse {
                bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
                color: [0.0, 0.0, 1.0, 1.0],
            },
        ];
        let vertices = tessellate(&shapes);
        assert_eq!(vertices.len(), 6 + ELLIPSE_SEGMENTS as usize * 3);
        assert_eq!(vertices[0].color, RED);
        assert_eq!(vertices[6].color, [0.0, 0.0, 1.0, 1.0]);
    }
}
