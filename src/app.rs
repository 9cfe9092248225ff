use crate::config::PaintConfig;
use crate::controller::StrokeController;
use crate::error::ExportResult;
use crate::file_handler::{FileHandler, SaveOutcome};
use crate::input::{InputEvent, InputHandler};
use crate::panels::{self, ToolbarAction};
use crate::state::BrushSettings;
use crate::surface::Surface;
use crate::texture_manager::CanvasTexture;

/// The paint application: toolbar on top, fixed-size canvas below.
pub struct PaintApp {
    config: PaintConfig,
    settings: BrushSettings,
    surface: Surface,
    controller: StrokeController,
    input: InputHandler,
    texture: CanvasTexture,
    file_handler: FileHandler,
    /// Result of the last save, shown under the canvas
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn with_config(config: PaintConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let file_handler = FileHandler::new(config.export_file_name.clone(), config.output_dir.clone());
        #[cfg(target_arch = "wasm32")]
        let file_handler = FileHandler::new(config.export_file_name.clone());

        Self {
            settings: config.initial_settings(),
            surface: Surface::new(config.canvas_width, config.canvas_height),
            controller: StrokeController::new(),
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
            file_handler,
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut BrushSettings {
        &mut self.settings
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn controller(&self) -> &StrokeController {
        &self.controller
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feeds canvas events to the stroke controller. Returns true if the
    /// raster changed.
    pub fn handle_input_events(&mut self, events: &[InputEvent]) -> bool {
        self.controller.handle_events(events, &self.settings, &mut self.surface)
    }

    /// Wipes the canvas, no confirmation.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.surface.clear();
    }

    /// Exports the canvas as PNG and hands it to the file handler.
    pub fn save(&self) -> ExportResult<SaveOutcome> {
        let bytes = self.surface.export()?;
        self.file_handler.save_png(&bytes)
    }

    pub fn apply_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Clear => self.clear(),
            ToolbarAction::Save => {
                let status = match self.save() {
                    Ok(outcome) => outcome.to_string(),
                    Err(err) => {
                        log::error!("Failed to save drawing: {err}");
                        format!("Save failed: {err}")
                    }
                };
                self.status = Some(status);
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(action) = panels::toolbar(ui, &mut self.settings, &self.config.palette) {
                self.apply_action(action);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().drag_to_scroll(false).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let [width, height] = self.surface.size();
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(width as f32, height as f32),
                        egui::Sense::click_and_drag(),
                    );

                    let events = self.input.process_input(ctx, &response);
                    if self.handle_input_events(&events) {
                        ctx.request_repaint();
                    }

                    let texture = self.texture.texture_id(ctx, &self.surface);
                    panels::paint_canvas(ui, rect, texture);

                    if let Some(status) = &self.status {
                        ui.add_space(6.0);
                        ui.label(status.as_str());
                    }
                });
            });
        });
    }
}
