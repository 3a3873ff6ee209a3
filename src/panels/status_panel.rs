use egui::Ui;

use crate::engine::RenderSnapshot;

/// Render the engine snapshot as plain text fields.
pub fn status_fields(ui: &mut Ui, snapshot: &RenderSnapshot<'_>) {
    ui.label(format!("Mode: {}", snapshot.mode_name));

    let (x, y) = match snapshot.cursor {
        Some(p) => (format!("{}", p.x.round()), format!("{}", p.y.round())),
        None => ("-".to_owned(), "-".to_owned()),
    };
    ui.label(format!("Cursor X: {x}"));
    ui.label(format!("Cursor Y: {y}"));

    ui.label(format!(
        "Canvas buffer: {} × {} px",
        snapshot.buffer.x, snapshot.buffer.y
    ));
    ui.label(format!("Shapes: {}", snapshot.shape_count));
    ui.label(format!("Last action: {}", snapshot.last_action));
}
