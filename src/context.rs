//! The capability set the engine exposes to whichever mode is active.

use egui::{CursorIcon, Pos2, Vec2};

use crate::shape::{ShapeList, ShapeType};
use crate::viewport::Viewport;

/// Borrowed view of the engine handed to the active mode on every lifecycle
/// callback and event handler.
///
/// Modes see the engine only through this surface: pointer mapping, the live
/// shape list, render scheduling, cursor styling, and action reporting.
pub struct ModeContext<'a> {
    pub(crate) viewport: &'a Viewport,
    pub(crate) shapes: &'a mut ShapeList,
    pub(crate) render_due: &'a mut bool,
    pub(crate) cursor: &'a mut CursorIcon,
    pub(crate) last_action: &'a mut String,
}

impl ModeContext<'_> {
    /// Map a raw pointer position (screen coordinates) into surface-buffer
    /// coordinates, accounting for the displayed-size/buffer-size ratio.
    pub fn surface_point(&self, screen: Pos2) -> Pos2 {
        self.viewport.to_surface(screen)
    }

    /// Live view of the shape list; reflects shapes added during the gesture.
    pub fn shapes(&self) -> &ShapeList {
        self.shapes
    }

    /// Append a shape to the list and schedule a re-render.
    pub fn add_shape(&mut self, shape: ShapeType) {
        self.shapes.push(shape);
        self.request_render();
    }

    /// Translate an existing shape by id. Returns false if the id is gone.
    pub fn translate_shape(&mut self, id: usize, delta: Vec2) -> bool {
        self.shapes.translate(id, delta)
    }

    /// Mark that a re-render is due. Multiple requests within one frame
    /// collapse into a single repaint.
    pub fn request_render(&mut self) {
        *self.render_due = true;
    }

    /// Set the pointer style shown over the canvas.
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        *self.cursor = cursor;
    }

    /// Record a human-readable description of what just happened. Purely
    /// informational; shown in the status panel and debug log.
    pub fn report_action(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        *self.last_action = message;
    }
}
