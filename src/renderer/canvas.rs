//! Immediate-mode drawing capability
//!
//! The scene draws through [`Canvas`]; [`ShapeList`] records the calls so the
//! host can tessellate and present them (and tests can inspect them).

use glam::Vec2;

/// RGBA, 0.0..=1.0 per channel
pub type Color = [f32; 4];

/// Axis-aligned box in playfield pixels, edges as (left, top)-(right, bottom)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of the given edges offset by `origin`
    pub fn at(origin: Vec2, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(
            origin.x + left,
            origin.y + top,
            origin.x + right,
            origin.y + bottom,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.bottom - self.top)
    }
}

/// Filled primitives in playfield pixel space
pub trait Canvas {
    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
    fn fill_rect(&mut self, bounds: Rect, color: Color);
    /// Convex polygon, points in order
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ellipse { bounds: Rect, color: Color },
    Rect { bounds: Rect, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
}

/// Canvas that records shapes in draw order
#[derive(Debug, Clone, Default)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Canvas for ShapeList {
    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.shapes.push(Shape::Ellipse { bounds, color });
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.shapes.push(Shape::Rect { bounds, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
