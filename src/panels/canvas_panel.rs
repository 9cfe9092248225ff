use eframe::egui::{self, Color32, Rect, Stroke, TextureId};

/// Page color shown behind transparent raster pixels
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

const BORDER: Stroke = Stroke {
    width: 2.0,
    color: Color32::from_gray(209),
};

/// Paints the canvas texture at `rect` on a white page with a light border.
pub fn paint_canvas(ui: &egui::Ui, rect: Rect, texture: TextureId) {
    let painter = ui.painter_at(rect.expand(BORDER.width));
    painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
    painter.image(
        texture,
        rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
    painter.rect_stroke(rect.expand(BORDER.width * 0.5), 0.0, BORDER);
}
