use crate::components::{ColorSwatch, ToolButton};
use crate::state::{BrushSettings, BrushSize};
use crate::tool::Tool;
use eframe::egui::{self, Color32, RichText};

/// Canvas-level actions requested from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Clear,
    Save,
}

/// Tool buttons, palette, color picker, size slider and the Clear/Save
/// buttons. Selection changes are written straight into `settings`.
pub fn toolbar(ui: &mut egui::Ui, settings: &mut BrushSettings, palette: &[Color32]) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        for tool in Tool::ALL {
            let selected = settings.tool() == tool;
            if ToolButton::new(tool, selected).show(ui).clicked() {
                settings.select_tool(tool);
            }
        }

        ui.separator();

        for &color in palette {
            let selected = settings.color() == color;
            if ColorSwatch::new(color, selected).show(ui).clicked() {
                settings.set_color(color);
            }
        }

        // Custom color overrides whatever swatch was picked.
        let mut color = settings.color();
        if egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque)
            .changed()
        {
            settings.set_color(color);
        }

        ui.separator();

        ui.label("Size:");
        let mut size = settings.size().get();
        let slider = egui::Slider::new(&mut size, BrushSize::MIN..=BrushSize::MAX)
            .step_by(1.0)
            .show_value(false);
        if ui.add(slider).changed() {
            settings.set_size(size);
        }
        ui.label(settings.size().get().to_string());

        ui.separator();

        let clear = egui::Button::new(RichText::new("Clear").color(Color32::WHITE))
            .fill(Color32::from_rgb(239, 68, 68));
        if ui.add(clear).clicked() {
            action = Some(ToolbarAction::Clear);
        }

        let save = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
            .fill(Color32::from_rgb(34, 197, 94));
        if ui.add(save).clicked() {
            action = Some(ToolbarAction::Save);
        }
    });

    action
}
