use egui::{Pos2, Vec2};

use super::{Shape, ShapeError, ShapeStyle};
use crate::geometry::HIT_TOLERANCE;
use crate::viewport::Surface;

/// A circle anchored at its center point.
#[derive(Debug, Clone)]
pub struct Circle {
    id: usize,
    center: Pos2,
    radius: f32,
    style: ShapeStyle,
}

impl Circle {
    /// Create a circle. A negative radius is rejected outright.
    pub fn new(id: usize, center: Pos2, radius: f32, style: ShapeStyle) -> Result<Self, ShapeError> {
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { id, center, radius, style })
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

impl Shape for Circle {
    fn id(&self) -> usize {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "circle"
    }

    /// Hits anywhere inside the disc, or within [`HIT_TOLERANCE`] units
    /// outside the boundary so thin-stroked circles stay grabbable.
    fn hit_test(&self, point: Pos2) -> bool {
        point.distance(self.center) - self.radius <= HIT_TOLERANCE
    }

    fn draw(&self, surface: &Surface<'_>) {
        surface.circle(self.center, self.radius, &self.style);
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
