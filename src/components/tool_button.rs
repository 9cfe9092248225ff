use crate::tool::Tool;
use eframe::egui;

/// Square toolbar button showing a tool glyph, highlighted when selected.
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(36.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(59, 130, 246) // Blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(235)
            } else {
                egui::Color32::WHITE
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::BLACK
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );
        }

        response.on_hover_text(self.tool.name())
    }
}
