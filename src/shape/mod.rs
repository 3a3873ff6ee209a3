use egui::{Pos2, Vec2};
use thiserror::Error;

use crate::viewport::Surface;

mod circle;
mod common;
mod list;
mod rect;

pub use circle::Circle;
pub use common::{MIN_CIRCLE_RADIUS, MIN_SHAPE_SIZE, ShapeStyle};
pub use list::ShapeList;
pub use rect::Rectangle;

/// Errors raised when a shape is constructed with invalid geometry.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("circle radius must be non-negative, got {0}")]
    NegativeRadius(f32),
}

/// Common trait that all shapes on the canvas implement.
pub trait Shape {
    /// Stable identifier assigned at construction.
    fn id(&self) -> usize;

    /// Shape kind as a short string, for reporting.
    fn shape_type(&self) -> &'static str;

    /// Test whether the given surface point hits this shape.
    fn hit_test(&self, point: Pos2) -> bool;

    /// Paint the shape onto the surface, fill first, then outline.
    fn draw(&self, surface: &Surface<'_>);

    /// Move the shape's reference point (center or top-left corner) by the
    /// given delta. The only mutation path for a committed shape.
    fn translate(&mut self, delta: Vec2);
}

/// Enumeration of all shape kinds on the canvas.
///
/// A square is a [`Rectangle`] with equal sides and is produced only by
/// [`factory::create_square`]; it has no variant of its own.
#[derive(Debug, Clone)]
pub enum ShapeType {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape for ShapeType {
    fn id(&self) -> usize {
        match self {
            ShapeType::Circle(c) => c.id(),
            ShapeType::Rectangle(r) => r.id(),
        }
    }

    fn shape_type(&self) -> &'static str {
        match self {
            ShapeType::Circle(_) => "circle",
            ShapeType::Rectangle(_) => "rectangle",
        }
    }

    fn hit_test(&self, point: Pos2) -> bool {
        match self {
            ShapeType::Circle(c) => c.hit_test(point),
            ShapeType::Rectangle(r) => r.hit_test(point),
        }
    }

    fn draw(&self, surface: &Surface<'_>) {
        match self {
            ShapeType::Circle(c) => c.draw(surface),
            ShapeType::Rectangle(r) => r.draw(surface),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ShapeType::Circle(c) => c.translate(delta),
            ShapeType::Rectangle(r) => r.translate(delta),
        }
    }
}

/// Factory functions for creating shapes with fresh ids.
pub mod factory {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use egui::{Color32, Pos2, pos2};

    use super::{Circle, Rectangle, ShapeError, ShapeStyle, ShapeType};

    // Single counter for all shapes; ids stay unique for the process lifetime.
    static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

    fn next_id() -> usize {
        NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst)
    }

    /// Create a new circle. Fails if `radius` is negative.
    pub fn create_circle(
        center: Pos2,
        radius: f32,
        style: ShapeStyle,
    ) -> Result<ShapeType, ShapeError> {
        Ok(ShapeType::Circle(Circle::new(next_id(), center, radius, style)?))
    }

    /// Create a new rectangle from its top-left corner.
    pub fn create_rectangle(top_left: Pos2, width: f32, height: f32, style: ShapeStyle) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(next_id(), top_left, width, height, style))
    }

    /// Create a new square: a rectangle with equal sides.
    pub fn create_square(top_left: Pos2, side: f32, style: ShapeStyle) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(next_id(), top_left, side, side, style))
    }

    /// The fixed demo set shown on startup.
    pub fn demo_shapes() -> Result<Vec<ShapeType>, ShapeError> {
        let filled = |rgb: u32, stroke_rgb: u32, width: f32| ShapeStyle {
            fill: Some(Color32::from_rgb(
                (rgb >> 16) as u8,
                (rgb >> 8) as u8,
                rgb as u8,
            )),
            stroke: Color32::from_rgb(
                (stroke_rgb >> 16) as u8,
                (stroke_rgb >> 8) as u8,
                stroke_rgb as u8,
            ),
            stroke_width: width,
        };

        Ok(vec![
            create_circle(pos2(100.0, 120.0), 5.0, filled(0xFF6B6B, 0xFF6B6B, 5.0))?,
            create_circle(pos2(220.0, 80.0), 7.0, filled(0x4D96FF, 0x4D96FF, 3.0))?,
            create_square(pos2(50.0, 200.0), 60.0, filled(0x6BCB77, 0xFFD93D, 3.0)),
            create_square(pos2(140.0, 210.0), 30.0, filled(0xFFD93D, 0x6BCB77, 2.0)),
            create_rectangle(pos2(220.0, 180.0), 120.0, 60.0, filled(0x845EC2, 0x845EC2, 1.0)),
            create_rectangle(pos2(380.0, 60.0), 80.0, 30.0, filled(0x2C73D2, 0x845EC2, 3.0)),
        ])
    }
}
