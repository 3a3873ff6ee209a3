use egui::{Color32, Slider, Ui, color_picker};

use crate::mode::StylePatch;

/// Fill / stroke / width controls for the creation modes.
///
/// Edits are forwarded live to the active mode as a [`StylePatch`]: the
/// committed style uses the picked values directly, while the preview fill
/// is the picked fill at 20% alpha with a fixed thin outline.
pub struct StyleControls {
    fill: Color32,
    stroke: Color32,
    width: f32,
}

impl Default for StyleControls {
    fn default() -> Self {
        Self {
            fill: Color32::from_rgb(0x4D, 0x96, 0xFF),
            stroke: Color32::from_rgb(0x4D, 0x96, 0xFF),
            width: 3.0,
        }
    }
}

impl StyleControls {
    /// Show the controls. Returns a patch when any value changed this frame.
    /// Disabled (grayed out) when the active tool has no style attributes.
    pub fn ui(&mut self, ui: &mut Ui, enabled: bool) -> Option<StylePatch> {
        let mut changed = false;

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                ui.label("Fill:");
                changed |= color_picker::color_edit_button_srgba(
                    ui,
                    &mut self.fill,
                    color_picker::Alpha::Opaque,
                )
                .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Stroke:");
                changed |= color_picker::color_edit_button_srgba(
                    ui,
                    &mut self.stroke,
                    color_picker::Alpha::Opaque,
                )
                .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Width:");
                changed |= ui.add(Slider::new(&mut self.width, 1.0..=10.0)).changed();
            });
        });

        changed.then(|| self.patch())
    }

    /// The full patch for the current picker values.
    pub fn patch(&self) -> StylePatch {
        StylePatch {
            committed_fill: Some(self.fill),
            committed_stroke: Some(self.stroke),
            committed_width: Some(self.width.max(1.0)),
            preview_fill: Some(Color32::from_rgba_unmultiplied(
                self.fill.r(),
                self.fill.g(),
                self.fill.b(),
                51,
            )),
            preview_stroke: Some(self.stroke),
            preview_width: Some(2.0),
        }
    }
}
