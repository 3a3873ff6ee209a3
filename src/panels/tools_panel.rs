use egui::Ui;

use crate::mode::ToolKind;

/// Draw the tool selection buttons. Returns the tool the user just picked,
/// if any.
pub fn tool_buttons(ui: &mut Ui, active: ToolKind) -> Option<ToolKind> {
    let mut selected = None;

    ui.horizontal(|ui| {
        for tool in ToolKind::ALL {
            if ui.selectable_label(active == tool, tool.label()).clicked() && tool != active {
                log::info!("Tool selected from UI: {}", tool.label());
                selected = Some(tool);
            }
        }
    });

    selected
}
