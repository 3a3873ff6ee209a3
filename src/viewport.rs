//! Surface-buffer coordinate mapping and the paint wrapper shapes draw with.
//!
//! The canvas has a fixed logical buffer size; the rectangle it is displayed
//! in may be a different size (the app scales it to fit the window). All
//! shape geometry lives in buffer coordinates, so pointer positions must be
//! mapped in and paint calls mapped back out.

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2, vec2};

use crate::shape::ShapeStyle;

/// Maps between screen coordinates and surface-buffer coordinates.
///
/// The scale factor is `buffer / displayed` per axis, so a canvas displayed
/// at half its buffer size maps a 1-pixel pointer movement to 2 buffer units.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    buffer: Vec2,
    screen_rect: Rect,
}

impl Viewport {
    /// A viewport whose displayed rect starts out equal to the buffer,
    /// i.e. an identity mapping until [`Viewport::set_screen_rect`] is called.
    pub fn new(buffer: Vec2) -> Self {
        Self {
            buffer,
            screen_rect: Rect::from_min_size(Pos2::ZERO, buffer),
        }
    }

    /// Update where (and how large) the canvas is displayed on screen.
    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.screen_rect = rect;
    }

    pub fn buffer(&self) -> Vec2 {
        self.buffer
    }

    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    /// Convert a screen position to surface-buffer coordinates.
    pub fn to_surface(&self, screen: Pos2) -> Pos2 {
        let scale = self.buffer / self.screen_rect.size();
        pos2(
            (screen.x - self.screen_rect.min.x) * scale.x,
            (screen.y - self.screen_rect.min.y) * scale.y,
        )
    }

    /// Convert a surface-buffer position back to screen coordinates.
    pub fn to_screen(&self, surface: Pos2) -> Pos2 {
        let scale = self.screen_rect.size() / self.buffer;
        pos2(
            self.screen_rect.min.x + surface.x * scale.x,
            self.screen_rect.min.y + surface.y * scale.y,
        )
    }

    /// Screen pixels per surface unit. The app keeps the displayed rect at
    /// the buffer's aspect ratio, so both axes carry the same factor there.
    pub fn screen_scale(&self) -> Vec2 {
        self.screen_rect.size() / self.buffer
    }
}

/// The drawing surface handed to shapes and mode overlays.
///
/// Wraps an [`egui::Painter`] together with the viewport transform so all
/// paint calls take surface-buffer coordinates. egui paint calls are
/// stateless, so nothing leaks between one shape's draw and the next.
pub struct Surface<'a> {
    painter: &'a Painter,
    viewport: &'a Viewport,
}

impl<'a> Surface<'a> {
    pub fn new(painter: &'a Painter, viewport: &'a Viewport) -> Self {
        Self { painter, viewport }
    }

    /// Fill the whole displayed canvas with a background color.
    pub fn clear(&self, color: Color32) {
        self.painter.rect_filled(self.viewport.screen_rect(), 0.0, color);
    }

    /// Paint a circle: fill (if any) first, then outline.
    pub fn circle(&self, center: Pos2, radius: f32, style: &ShapeStyle) {
        let scale = self.viewport.screen_scale();
        let center = self.viewport.to_screen(center);
        let radius = radius * scale.x;

        if let Some(fill) = style.fill {
            self.painter.circle_filled(center, radius, fill);
        }
        self.painter
            .circle_stroke(center, radius, Stroke::new(style.stroke_width * scale.x, style.stroke));
    }

    /// Paint an axis-aligned rectangle: fill (if any) first, then outline.
    pub fn rect(&self, top_left: Pos2, size: Vec2, style: &ShapeStyle) {
        let scale = self.viewport.screen_scale();
        let rect = Rect::from_min_size(
            self.viewport.to_screen(top_left),
            vec2(size.x * scale.x, size.y * scale.y),
        );

        if let Some(fill) = style.fill {
            self.painter.rect_filled(rect, 0.0, fill);
        }
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(style.stroke_width * scale.x, style.stroke));
    }
}
