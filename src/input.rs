//! Domain-level pointer events and their translation from raw egui input.
//!
//! The engine consumes [`PointerEvent`]s; where they come from is the app
//! shell's concern. [`InputTranslator`] reads one egui frame's pointer state
//! and produces the ordered events that happened over the canvas rect,
//! synthesizing [`PointerEvent::Out`] when the pointer leaves it.

use egui::{Context, Pos2, PointerButton, Rect};

/// A pointer event over the canvas, with its position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button was pressed.
    Down { pos: Pos2 },
    /// Pointer moved (with or without the button held).
    Move { pos: Pos2 },
    /// Primary button was released.
    Up { pos: Pos2 },
    /// Pointer left the canvas area (or the window entirely).
    Out,
}

/// The kind of a [`PointerEvent`], used by the dispatcher to match events
/// against a mode's declared handler set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Out,
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Down { .. } => PointerEventKind::Down,
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Up { .. } => PointerEventKind::Up,
            PointerEvent::Out => PointerEventKind::Out,
        }
    }
}

/// Converts raw egui frame input into [`PointerEvent`]s over the canvas.
#[derive(Debug, Default)]
pub struct InputTranslator {
    /// Last pointer position seen inside the canvas rect, if any.
    last_inside: Option<Pos2>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one frame of pointer input and return the events that occurred
    /// over `canvas_rect`, in gesture order: down, move, up, then out.
    pub fn collect(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let inside = hover.filter(|pos| canvas_rect.contains(*pos));

            match inside {
                Some(pos) => {
                    if input.pointer.button_pressed(PointerButton::Primary) {
                        events.push(PointerEvent::Down { pos });
                    }
                    if self.last_inside != Some(pos) {
                        events.push(PointerEvent::Move { pos });
                    }
                    if input.pointer.button_released(PointerButton::Primary) {
                        events.push(PointerEvent::Up { pos });
                    }
                    self.last_inside = Some(pos);
                }
                None => {
                    // Left the canvas (or the window): emit a single Out.
                    if self.last_inside.take().is_some() {
                        events.push(PointerEvent::Out);
                    }
                }
            }
        });

        events
    }
}
