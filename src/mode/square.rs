use egui::{CursorIcon, Pos2, Vec2, pos2, vec2};

use super::{CreateStyle, Mode, StylePatch};
use crate::context::ModeContext;
use crate::shape::{MIN_SHAPE_SIZE, factory};
use crate::viewport::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CreateState {
    Idle,
    /// Dragging out a square centered on the anchor. The side grows with the
    /// larger of the two axis deltas.
    Creating { anchor: Pos2, side: f32 },
}

/// Drag outward from a center point to grow a square symmetrically.
#[derive(Debug)]
pub struct CreateSquareMode {
    style: CreateStyle,
    state: CreateState,
}

impl CreateSquareMode {
    pub fn new(style: CreateStyle) -> Self {
        Self { style, state: CreateState::Idle }
    }

    fn side_for(delta: Vec2) -> f32 {
        (delta.x.abs().max(delta.y.abs()) * 2.0).max(MIN_SHAPE_SIZE)
    }

    fn top_left_for(anchor: Pos2, side: f32) -> Pos2 {
        pos2(anchor.x - side / 2.0, anchor.y - side / 2.0)
    }
}

impl Mode for CreateSquareMode {
    fn name(&self) -> &'static str {
        "create_square"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn on_exit(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = CreateState::Idle;
    }

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let anchor = ctx.surface_point(screen);
        self.state = CreateState::Creating { anchor, side: 0.0 };
        ctx.report_action(format!(
            "Start square at ({}, {})",
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
        self.state = CreateState::Creating { anchor, side: Self::side_for(current - anchor) };
        ctx.request_render();
    }

    fn on_pointer_up(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let CreateState::Creating { anchor, .. } = self.state else {
            return;
        };

        let release = ctx.surface_point(screen);
        let side = Self::side_for(release - anchor);
        let top_left = Self::top_left_for(anchor, side);

        ctx.add_shape(factory::create_square(top_left, side, self.style.committed));
        ctx.report_action(format!(
            "Created square topleft-corner=({}, {}) side={}",
            top_left.x.round(),
            top_left.y.round(),
            side.round()
        ));

        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>) {
        if let CreateState::Creating { .. } = self.state {
            ctx.report_action("Square creation cancelled");
        }
        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn render_overlay(&self, surface: &Surface<'_>) {
        let CreateState::Creating { anchor, side } = self.state else {
            return;
        };
        surface.rect(Self::top_left_for(anchor, side), vec2(side, side), &self.style.preview);
    }

    fn update_attributes(&mut self, patch: &StylePatch) {
        patch.apply_to(&mut self.style);
    }
}
