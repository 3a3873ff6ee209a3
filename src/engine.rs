//! The canvas engine: owns the shape list, the active mode, and the
//! render-request flag, and orchestrates mode transitions.

use egui::{Color32, CursorIcon, Painter, Pos2, Rect, Vec2};

use crate::context::ModeContext;
use crate::dispatcher::EventDispatcher;
use crate::input::PointerEvent;
use crate::mode::{ActiveMode, Mode, StylePatch};
use crate::shape::{Shape, ShapeList, ShapeType};
use crate::viewport::{Surface, Viewport};

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Plain-text snapshot of the engine published on each repaint for the
/// status panel. Absence of a consumer is fine; producing it is cheap.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub mode_name: &'static str,
    /// Last pointer position over the canvas, in surface coordinates.
    pub cursor: Option<Pos2>,
    pub buffer: Vec2,
    pub shape_count: usize,
    pub last_action: &'a str,
}

/// Owns all interaction state. Exactly one mode is active at a time (none
/// only before the first [`Engine::set_mode`] call).
pub struct Engine {
    shapes: ShapeList,
    mode: Option<ActiveMode>,
    dispatcher: EventDispatcher,
    viewport: Viewport,
    render_due: bool,
    cursor: CursorIcon,
    last_pointer: Option<Pos2>,
    last_action: String,
}

impl Engine {
    /// New engine with an empty shape list and the given surface buffer size.
    pub fn new(buffer: Vec2) -> Self {
        Self {
            shapes: ShapeList::new(),
            mode: None,
            dispatcher: EventDispatcher::new(),
            viewport: Viewport::new(buffer),
            render_due: true,
            cursor: CursorIcon::Default,
            last_pointer: None,
            last_action: String::new(),
        }
    }

    /// Swap in a new interaction mode.
    ///
    /// The sequence is atomic from the caller's point of view: the old mode
    /// exits and its bindings are dropped before the new mode's bindings are
    /// installed, so two modes never react to the same event stream.
    pub fn set_mode(&mut self, mut new_mode: ActiveMode) {
        log::info!("Switching to {} mode", new_mode.name());

        let mut ctx = ModeContext {
            viewport: &self.viewport,
            shapes: &mut self.shapes,
            render_due: &mut self.render_due,
            cursor: &mut self.cursor,
            last_action: &mut self.last_action,
        };

        if let Some(mut old) = self.mode.take() {
            old.on_exit(&mut ctx);
        }
        self.dispatcher.detach();

        self.dispatcher.attach(new_mode.handled_events());
        new_mode.on_enter(&mut ctx);

        self.mode = Some(new_mode);
        self.render_due = true;
    }

    /// Feed one pointer event through the dispatcher to the active mode.
    /// Events arriving before the first `set_mode` are dropped.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down { pos } | PointerEvent::Move { pos } | PointerEvent::Up { pos } => {
                self.last_pointer = Some(self.viewport.to_surface(*pos));
            }
            PointerEvent::Out => self.last_pointer = None,
        }

        let Some(mode) = self.mode.as_mut() else {
            return;
        };

        let mut ctx = ModeContext {
            viewport: &self.viewport,
            shapes: &mut self.shapes,
            render_due: &mut self.render_due,
            cursor: &mut self.cursor,
            last_action: &mut self.last_action,
        };
        self.dispatcher.dispatch(event, mode, &mut ctx);
    }

    /// Forward a style patch to the active mode. A no-op when no mode is
    /// installed or the mode has no style attributes.
    pub fn update_mode_attributes(&mut self, patch: &StylePatch) {
        if let Some(mode) = self.mode.as_mut() {
            mode.update_attributes(patch);
        }
    }

    pub fn add_shape(&mut self, shape: ShapeType) {
        self.shapes.push(shape);
        self.render_due = true;
    }

    /// Mark that a re-render is due. Never repaints synchronously.
    pub fn request_render(&mut self) {
        self.render_due = true;
    }

    /// Take the pending render request, if any. Any number of requests since
    /// the last call collapse into one `true`.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_due)
    }

    /// Paint the whole canvas: background, every committed shape in
    /// insertion order, then the active mode's preview overlay on top.
    pub fn render(&self, painter: &Painter) {
        let surface = Surface::new(painter, &self.viewport);
        surface.clear(CANVAS_BACKGROUND);
        for shape in self.shapes.iter() {
            shape.draw(&surface);
        }
        if let Some(mode) = &self.mode {
            mode.render_overlay(&surface);
        }
    }

    /// Update where the canvas is displayed this frame.
    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.viewport.set_screen_rect(rect);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn mode_name(&self) -> Option<&'static str> {
        self.mode.as_ref().map(Mode::name)
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            mode_name: self.mode_name().unwrap_or("-"),
            cursor: self.last_pointer,
            buffer: self.viewport.buffer(),
            shape_count: self.shapes.len(),
            last_action: &self.last_action,
        }
    }
}
