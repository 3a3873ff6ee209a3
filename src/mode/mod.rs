//! Interaction modes: one state machine per tool.
//!
//! All modes interpret the same four pointer events; what the events mean
//! depends entirely on which mode is active. The engine holds exactly one
//! [`ActiveMode`] behind the [`Mode`] trait and never branches on the
//! concrete tool anywhere else.

use egui::{Color32, CursorIcon, Pos2};

use crate::context::ModeContext;
use crate::dispatcher::EventSet;
use crate::shape::ShapeStyle;
use crate::viewport::Surface;

mod circle;
mod rect;
mod select;
mod square;

pub use circle::CreateCircleMode;
pub use rect::CreateRectangleMode;
pub use select::SelectMode;
pub use square::CreateSquareMode;

/// Interface every interaction mode implements.
pub trait Mode {
    /// Tool identifier, e.g. `"select"` or `"create_circle"`.
    fn name(&self) -> &'static str;

    /// Pointer style shown while this mode is active.
    fn cursor(&self) -> CursorIcon;

    /// Which pointer events this mode wants delivered. The dispatcher binds
    /// exactly this set.
    fn handled_events(&self) -> EventSet {
        EventSet::ALL
    }

    /// Called when the mode becomes active.
    fn on_enter(&mut self, ctx: &mut ModeContext<'_>) {
        ctx.set_cursor(self.cursor());
    }

    /// Called when the mode is deactivated. Implementations drop any
    /// in-progress gesture state here.
    fn on_exit(&mut self, _ctx: &mut ModeContext<'_>) {}

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>);
    fn on_pointer_move(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>);
    fn on_pointer_up(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>);
    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>);

    /// Paint the mode's live preview on top of the committed shapes.
    fn render_overlay(&self, _surface: &Surface<'_>) {}

    /// Apply a partial style update. Modes without style attributes ignore
    /// the patch.
    fn update_attributes(&mut self, _patch: &StylePatch) {}
}

/// Style attributes carried by the creation modes: one style for the live
/// preview, another for the committed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreateStyle {
    pub preview: ShapeStyle,
    pub committed: ShapeStyle,
}

/// A partial style update from the style controls. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StylePatch {
    pub committed_fill: Option<Color32>,
    pub committed_stroke: Option<Color32>,
    pub committed_width: Option<f32>,
    pub preview_fill: Option<Color32>,
    pub preview_stroke: Option<Color32>,
    pub preview_width: Option<f32>,
}

impl StylePatch {
    pub fn apply_to(&self, style: &mut CreateStyle) {
        if let Some(fill) = self.committed_fill {
            style.committed.fill = Some(fill);
        }
        if let Some(stroke) = self.committed_stroke {
            style.committed.stroke = stroke;
        }
        if let Some(width) = self.committed_width {
            style.committed.stroke_width = width;
        }
        if let Some(fill) = self.preview_fill {
            style.preview.fill = Some(fill);
        }
        if let Some(stroke) = self.preview_stroke {
            style.preview.stroke = stroke;
        }
        if let Some(width) = self.preview_width {
            style.preview.stroke_width = width;
        }
    }
}

/// The closed set of tools the toolbar can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Circle,
    Square,
    Rectangle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] =
        [ToolKind::Select, ToolKind::Circle, ToolKind::Square, ToolKind::Rectangle];

    /// Toolbar button label.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Circle => "Circle",
            ToolKind::Square => "Square",
            ToolKind::Rectangle => "Rectangle",
        }
    }

    /// Whether this tool creates shapes (and so has editable style attributes).
    pub fn creates_shapes(self) -> bool {
        !matches!(self, ToolKind::Select)
    }
}

fn rgba(rgb: u32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, alpha)
}

fn rgb(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Enumeration of all interaction modes, dispatching [`Mode`] by match.
#[derive(Debug)]
pub enum ActiveMode {
    Select(SelectMode),
    CreateCircle(CreateCircleMode),
    CreateSquare(CreateSquareMode),
    CreateRectangle(CreateRectangleMode),
}

impl ActiveMode {
    /// Build the mode for a tool, with that tool's default palette.
    pub fn for_tool(tool: ToolKind) -> Self {
        match tool {
            ToolKind::Select => ActiveMode::Select(SelectMode::new()),
            ToolKind::Circle => ActiveMode::CreateCircle(CreateCircleMode::new(CreateStyle {
                preview: ShapeStyle::new(Some(rgba(0x4D96FF, 51)), rgb(0x4D96FF), 2.0),
                committed: ShapeStyle::new(Some(rgb(0x4D96FF)), rgb(0x4D96FF), 3.0),
            })),
            ToolKind::Square => ActiveMode::CreateSquare(CreateSquareMode::new(CreateStyle {
                preview: ShapeStyle::new(Some(rgba(0xFFD93D, 51)), rgb(0x6BCB77), 2.0),
                committed: ShapeStyle::new(Some(rgb(0xFFD93D)), rgb(0x6BCB77), 3.0),
            })),
            ToolKind::Rectangle => {
                ActiveMode::CreateRectangle(CreateRectangleMode::new(CreateStyle {
                    preview: ShapeStyle::new(Some(rgba(0x845EC2, 51)), rgb(0x845EC2), 2.0),
                    committed: ShapeStyle::new(Some(rgb(0x845EC2)), rgb(0x845EC2), 3.0),
                }))
            }
        }
    }
}

impl Mode for ActiveMode {
    fn name(&self) -> &'static str {
        match self {
            ActiveMode::Select(m) => m.name(),
            ActiveMode::CreateCircle(m) => m.name(),
            ActiveMode::CreateSquare(m) => m.name(),
            ActiveMode::CreateRectangle(m) => m.name(),
        }
    }

    fn cursor(&self) -> CursorIcon {
        match self {
            ActiveMode::Select(m) => m.cursor(),
            ActiveMode::CreateCircle(m) => m.cursor(),
            ActiveMode::CreateSquare(m) => m.cursor(),
            ActiveMode::CreateRectangle(m) => m.cursor(),
        }
    }

    fn handled_events(&self) -> EventSet {
        match self {
            ActiveMode::Select(m) => m.handled_events(),
            ActiveMode::CreateCircle(m) => m.handled_events(),
            ActiveMode::CreateSquare(m) => m.handled_events(),
            ActiveMode::CreateRectangle(m) => m.handled_events(),
        }
    }

    fn on_enter(&mut self, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_enter(ctx),
            ActiveMode::CreateCircle(m) => m.on_enter(ctx),
            ActiveMode::CreateSquare(m) => m.on_enter(ctx),
            ActiveMode::CreateRectangle(m) => m.on_enter(ctx),
        }
    }

    fn on_exit(&mut self, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_exit(ctx),
            ActiveMode::CreateCircle(m) => m.on_exit(ctx),
            ActiveMode::CreateSquare(m) => m.on_exit(ctx),
            ActiveMode::CreateRectangle(m) => m.on_exit(ctx),
        }
    }

    fn on_pointer_down(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_pointer_down(screen, ctx),
            ActiveMode::CreateCircle(m) => m.on_pointer_down(screen, ctx),
            ActiveMode::CreateSquare(m) => m.on_pointer_down(screen, ctx),
            ActiveMode::CreateRectangle(m) => m.on_pointer_down(screen, ctx),
        }
    }

    fn on_pointer_move(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_pointer_move(screen, ctx),
            ActiveMode::CreateCircle(m) => m.on_pointer_move(screen, ctx),
            ActiveMode::CreateSquare(m) => m.on_pointer_move(screen, ctx),
            ActiveMode::CreateRectangle(m) => m.on_pointer_move(screen, ctx),
        }
    }

    fn on_pointer_up(&mut self, screen: Pos2, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_pointer_up(screen, ctx),
            ActiveMode::CreateCircle(m) => m.on_pointer_up(screen, ctx),
            ActiveMode::CreateSquare(m) => m.on_pointer_up(screen, ctx),
            ActiveMode::CreateRectangle(m) => m.on_pointer_up(screen, ctx),
        }
    }

    fn on_pointer_out(&mut self, ctx: &mut ModeContext<'_>) {
        match self {
            ActiveMode::Select(m) => m.on_pointer_out(ctx),
            ActiveMode::CreateCircle(m) => m.on_pointer_out(ctx),
            ActiveMode::CreateSquare(m) => m.on_pointer_out(ctx),
            ActiveMode::CreateRectangle(m) => m.on_pointer_out(ctx),
        }
    }

    fn render_overlay(&self, surface: &Surface<'_>) {
        match self {
            ActiveMode::Select(m) => m.render_overlay(surface),
            ActiveMode::CreateCircle(m) => m.render_overlay(surface),
            ActiveMode::CreateSquare(m) => m.render_overlay(surface),
            ActiveMode::CreateRectangle(m) => m.render_overlay(surface),
        }
    }

    fn update_attributes(&mut self, patch: &StylePatch) {
        match self {
            ActiveMode::Select(m) => m.update_attributes(patch),
            ActiveMode::CreateCircle(m) => m.update_attributes(patch),
            ActiveMode::CreateSquare(m) => m.update_attributes(patch),
            ActiveMode::CreateRectangle(m) => m.update_attributes(patch),
        }
    }
}
