use egui::{CursorIcon, Pos2};

use super::{CreateStyle, Mode, StylePatch};
use crate::context::ModeContext;
use crate::shape::{MIN_CIRCLE_RADIUS, factory};
use crate::viewport::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CreateState {
    Idle,
    /// Dragging out a circle. The anchor is the fixed center; the radius is
    /// the distance to the current pointer position.
    Creating { anchor: Pos2, radius: f32 },
}

/// Drag from a center point to grow a circle outward.
#[derive(Debug)]
pub struct CreateCircleMode {
    style: CreateStyle,
    state: CreateState,
}

impl CreateCircleMode {
    pub fn new(style: CreateStyle) -> Self {
        Self { style, state: CreateState::Idle }
    }
}

impl Mode for CreateCircleMode {
    fn name(&self) -> &'static str {
        "create_circle"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn on_exit(&mut self, _ctx: &mut ModeContext<'_>) {
        self.state = CreateState::Idle;
    }

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let anchor = ctx.surface_point(screen);
        self.state = CreateState::Creating { anchor, radius: 0.0 };
        ctx.report_action(format!(
            "Start circle at ({}, {})",
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
        let radius = (current - anchor).length().max(MIN_CIRCLE_RADIUS);
        self.state = CreateState::Creating { anchor, radius };
        ctx.request_render();
    }

    fn on_pointer_up(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        let CreateState::Creating { anchor, .. } = self.state else {
            return;
        };

        let release = ctx.surface_point(screen);
        let radius = (release - anchor).length().max(MIN_CIRCLE_RADIUS);

        match factory::create_circle(anchor, radius, self.style.committed) {
            Ok(circle) => {
                ctx.add_shape(circle);
                ctx.report_action(format!(
                    "Created circle center=({}, {}) radius={}",
                    anchor.x.round(),
                    anchor.y.round(),
                    radius.round()
                ));
            }
            Err(err) => log::error!("failed to commit circle: {err}"),
        }

        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>) {
        if let CreateState::Creating { .. } = self.state {
            ctx.report_action("Circle creation cancelled");
        }
        self.state = CreateState::Idle;
        ctx.request_render();
    }

    fn render_overlay(&self, surface: &Surface<'_>) {
        let CreateState::Creating { anchor, radius } = self.state else {
            return;
        };
        if radius <= 0.0 {
            return;
        }
        surface.circle(anchor, radius, &self.style.preview);
    }

    fn update_attributes(&mut self, patch: &StylePatch) {
        patch.apply_to(&mut self.style);
    }
}
