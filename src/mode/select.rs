use egui::{CursorIcon, Pos2};

use super::Mode;
use crate::context::ModeContext;

/// Sub-state of the select tool's drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// Waiting for a pointer-down over a shape.
    Idle,
    /// Moving an existing shape. `last_point` is the surface position of the
    /// previous pointer event, so each move applies an incremental delta.
    Dragging { id: usize, last_point: Pos2 },
}

/// The pointer tool: pick up an existing shape and drag it around.
#[derive(Debug)]
pub struct SelectMode {
    state: DragState,
}

impl SelectMode {
    pub fn new() -> Self {
        Self { state: DragState::Idle }
    }
}

impl Default for SelectMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for SelectMode {
    fn name(&self) -> &'static str {
        "select"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Default
    }

    fn on_enter(&mut self, ctx: &mut ModeContext<'_>) {
        ctx.set_cursor(self.cursor());
        ctx.report_action("Entered Select mode");
    }

    fn on_exit(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = DragState::Idle;
    }

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let point = ctx.surface_point(screen);

        // First match in insertion order wins; a miss clears any stale target.
        match ctx.shapes().hit_test(point) {
            Some(id) => {
                self.state = DragState::Dragging { id, last_point: point };
                ctx.report_action(format!(
                    "Picked shape for dragging at ({}, {})",
                    point.x.round(),
                    point.y.round()
                ));
            }
            None => self.state = DragState::Idle,
        }
    }

    fn on_pointer_move(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let DragState::Dragging { id, last_point } = self.state else {
            return;
        };

        let point = ctx.surface_point(screen);
        ctx.translate_shape(id, point - last_point);
        self.state = DragState::Dragging { id, last_point: point };
        ctx.request_render();
    }

    fn on_pointer_up(&mut self, _screen: Pos2, ctx: &mut ModeContext<'_>) {
        if let DragState::Dragging { .. } = self.state {
            ctx.report_action("Finished dragging shape");
            self.state = DragState::Idle;
        }
    }

    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>) {
        if let DragState::Dragging { .. } = self.state {
            ctx.report_action("Drag cancelled (mouse left canvas)");
            self.state = DragState::Idle;
        }
    }
}
