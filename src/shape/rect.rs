use egui::{Pos2, Vec2, vec2};

use super::{Shape, ShapeStyle};
use crate::geometry::between;
use crate::viewport::Surface;

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Squares are rectangles with equal sides; they carry no extra state.
#[derive(Debug, Clone)]
pub struct Rectangle {
    id: usize,
    top_left: Pos2,
    width: f32,
    height: f32,
    style: ShapeStyle,
}

impl Rectangle {
    pub fn new(id: usize, top_left: Pos2, width: f32, height: f32, style: ShapeStyle) -> Self {
        Self { id, top_left, width, height, style }
    }

    pub fn top_left(&self) -> Pos2 {
        self.top_left
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

impl Shape for Rectangle {
    fn id(&self) -> usize {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "rectangle"
    }

    /// Full-interior hit, tolerance-expanded on every edge.
    fn hit_test(&self, point: Pos2) -> bool {
        let left = self.top_left.x;
        let right = self.top_left.x + self.width;
        let top = self.top_left.y;
        let bottom = self.top_left.y + self.height;

        between(point.x, left, right) && between(point.y, top, bottom)
    }

    fn draw(&self, surface: &Surface<'_>) {
        surface.rect(self.top_left, vec2(self.width, self.height), &self.style);
    }

    fn translate(&mut self, delta: Vec2) {
        self.top_left += delta;
    }
}
