use egui::{CursorIcon, Pos2, Vec2, pos2, vec2};

use super::{CreateStyle, Mode, StylePatch};
use crate::context::ModeContext;
use crate::shape::{MIN_SHAPE_SIZE, factory};
use crate::viewport::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CreateState {
    Idle,
    /// Dragging out a rectangle centered on the anchor; each axis grows
    /// independently with its own delta.
    Creating { anchor: Pos2, size: Vec2 },
}

/// Drag outward from a center point to grow a rectangle, per axis.
#[derive(Debug)]
pub struct CreateRectangleMode {
    style: CreateStyle,
    state: CreateState,
}

impl CreateRectangleMode {
    pub fn new(style: CreateStyle) -> Self {
        Self { style, state: CreateState::Idle }
    }

    fn size_for(delta: Vec2) -> Vec2 {
        vec2(
            (delta.x.abs() * 2.0).max(MIN_SHAPE_SIZE),
            (delta.y.abs() * 2.0).max(MIN_SHAPE_SIZE),
        )
    }

    fn top_left_for(anchor: Pos2, size: Vec2) -> Pos2 {
        pos2(anchor.x - size.x / 2.0, anchor.y - size.y / 2.0)
    }
}

impl Mode for CreateRectangleMode {
    fn name(&self) -> &'static str {
        "create_rectangle"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn on_exit(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = CreateState::Idle;
    }

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let anchor = ctx.surface_point(screen);
        self.state = CreateState::Creating { anchor, size: Vec2::ZERO };
        ctx.report_action(format!(
            "Start rectangle at ({}, {})",
            anchor.x.round(),
            anchor.y.round()
        ));
        ctx.request_render();
    }

    fn on_pointer_move(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let CreateState::Creating { anchor, .. } = self.state else {
            return;
        };

        let current = ctx.surface_point(screen);
        self.state = CreateState::Creating { anchor, size: Self::size_for(current - anchor) };
        ctx.request_render();
    }

    fn on_pointer_up(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let CreateState::Creating { anchor, .. } = self.state else {
            return;
        };

        let release = ctx.surface_point(screen);
        let size = Self::size_for(release - anchor);
        let top_left = Self::top_left_for(anchor, size);

        ctx.add_shape(factory::create_rectangle(top_left, size.x, size.y, self.style.committed));
        ctx.report_action(format!(
            "Created rectangle topleft-corner=({}, {}) height={} width={}",
            top_left.x.round(),
            top_left.y.round(),
            size.y.round(),
            size.x.round()
        ));

        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>) {
        if let CreateState::Creating { .. } = self.state {
            ctx.report_action("Rectangle creation cancelled");
        }
        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn render_overlay(&self, surface: &Surface<'_>) {
        let CreateState::Creating { anchor, size } = self.state else {
            return;
        };
        surface.rect(Self::top_left_for(anchor, size), size, &self.style.preview);
    }

    fn update_attributes(&mut self, patch: &StylePatch) {
        patch.apply_to(&mut self.style);
    }
}
