use crate::state::{BrushSettings, BrushSize};
use crate::surface::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::tool::Tool;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used for the exported drawing
pub const EXPORT_FILE_NAME: &str = "paint-drawing.png";

/// Swatches shown in the toolbar, in order.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x00, 0x00, 0x00), // Black
    Color32::from_rgb(0xFF, 0xFF, 0xFF), // White
    Color32::from_rgb(0xFF, 0x00, 0x00), // Red
    Color32::from_rgb(0x00, 0xFF, 0x00), // Green
    Color32::from_rgb(0x00, 0x00, 0xFF), // Blue
    Color32::from_rgb(0xFF, 0xFF, 0x00), // Yellow
    Color32::from_rgb(0xFF, 0x00, 0xFF), // Magenta
    Color32::from_rgb(0x00, 0xFF, 0xFF), // Cyan
];

/// Startup configuration for the paint app.
///
/// Defaults are defined in code; nothing is read from disk or the
/// environment. Hosts embedding the app can build one from any serde format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub palette: Vec<Color32>,
    pub default_tool: Tool,
    pub default_color: Color32,
    pub default_size: BrushSize,
    pub export_file_name: String,
    /// Directory the native build writes exports to
    pub output_dir: PathBuf,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            palette: PALETTE.to_vec(),
            default_tool: Tool::Pencil,
            default_color: Color32::BLACK,
            default_size: BrushSize::default(),
            export_file_name: EXPORT_FILE_NAME.to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl PaintConfig {
    /// Toolbar selection the app starts with
    pub fn initial_settings(&self) -> BrushSettings {
        BrushSettings::new(self.default_tool, self.default_color, self.default_size)
    }
}
