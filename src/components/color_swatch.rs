use eframe::egui;

/// Round palette swatch; the active one gets a dark ring.
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() * 0.5 - 1.0;
            let ring = if self.selected {
                egui::Color32::BLACK
            } else if response.hovered() {
                egui::Color32::from_gray(160)
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().circle(
                rect.center(),
                radius,
                self.color,
                egui::Stroke::new(2.0, ring),
            );
            // Keep white visible on the light toolbar.
            if !self.selected && self.color == egui::Color32::WHITE {
                ui.painter().circle_stroke(
                    rect.center(),
                    radius,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(200)),
                );
            }
        }

        let [r, g, b, _] = self.color.to_array();
        response.on_hover_text(format!("#{r:02X}{g:02X}{b:02X}"))
    }
}
