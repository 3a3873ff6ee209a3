use egui::Vec2;

use crate::engine::Engine;
use crate::input::InputTranslator;
use crate::mode::{ActiveMode, ToolKind};
use crate::panels::{self, StyleControls};
use crate::shape::{ShapeError, factory};

/// Logical size of the drawing surface buffer. The canvas may be displayed
/// at a different size; the engine maps pointer coordinates accordingly.
const SURFACE_SIZE: Vec2 = Vec2::new(960.0, 600.0);

/// The application shell: wires toolbar, style controls and status display
/// to the interaction engine.
pub struct SketchApp {
    engine: Engine,
    input: InputTranslator,
    style: StyleControls,
    active_tool: ToolKind,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, ShapeError> {
        let mut engine = Engine::new(SURFACE_SIZE);
        for shape in factory::demo_shapes()? {
            engine.add_shape(shape);
        }
        engine.set_mode(ActiveMode::for_tool(ToolKind::Select));

        Ok(Self {
            engine,
            input: InputTranslator::new(),
            style: StyleControls::default(),
            active_tool: ToolKind::Select,
        })
    }

    fn select_tool(&mut self, tool: ToolKind) {
        if self.active_tool == tool {
            return;
        }
        self.active_tool = tool;
        self.engine.set_mode(ActiveMode::for_tool(tool));
    }

    fn keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let picked = ctx.input(|input| {
            [
                (egui::Key::V, ToolKind::Select),
                (egui::Key::C, ToolKind::Circle),
                (egui::Key::S, ToolKind::Square),
                (egui::Key::R, ToolKind::Rectangle),
            ]
            .into_iter()
            .find(|(key, _)| input.key_pressed(*key))
            .map(|(_, tool)| tool)
        });
        if let Some(tool) = picked {
            self.select_tool(tool);
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.keyboard_shortcuts(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sketch");
                ui.separator();
                if let Some(tool) = panels::tool_buttons(ui, self.active_tool) {
                    self.select_tool(tool);
                }
            });
        });

        egui::SidePanel::right("inspector").show(ctx, |ui| {
            ui.heading("Style");
            if let Some(patch) = self.style.ui(ui, self.active_tool.creates_shapes()) {
                self.engine.update_mode_attributes(&patch);
            }
            ui.separator();
            ui.heading("Status");
            panels::status_fields(ui, &self.engine.snapshot());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_size = fit_surface(ui.available_size(), SURFACE_SIZE);
            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());

            self.engine.set_screen_rect(response.rect);
            for event in self.input.collect(ctx, response.rect) {
                self.engine.handle_event(&event);
            }
            self.engine.render(&painter);

            if response.hovered() {
                ctx.set_cursor_icon(self.engine.cursor());
            }
        });

        // Coalesce however many render requests this frame produced into a
        // single scheduled repaint.
        if self.engine.take_render_request() {
            ctx.request_repaint();
        }
    }
}

/// Largest rectangle with the buffer's aspect ratio that fits the available
/// space, so the displayed canvas scales uniformly.
fn fit_surface(available: Vec2, buffer: Vec2) -> Vec2 {
    let scale = (available.x / buffer.x).min(available.y / buffer.y).max(f32::EPSILON);
    buffer * scale
}
