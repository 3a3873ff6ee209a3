use egui::Color32;

/// Smallest side length a rectangle or square may be committed with during
/// interactive creation.
pub const MIN_SHAPE_SIZE: f32 = 2.0;

/// Smallest radius a circle may be committed with during interactive creation.
pub const MIN_CIRCLE_RADIUS: f32 = 1.0;

/// Paint attributes carried by every shape: optional fill, outline color and
/// outline width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color32>,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl ShapeStyle {
    pub fn new(fill: Option<Color32>, stroke: Color32, stroke_width: f32) -> Self {
        Self { fill, stroke, stroke_width }
    }

    /// Outline-only style with no fill.
    pub fn outline(stroke: Color32, stroke_width: f32) -> Self {
        Self { fill: None, stroke, stroke_width }
    }
}
