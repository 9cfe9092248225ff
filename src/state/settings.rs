use crate::tool::{CompositeMode, StrokeStyle, Tool};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Brush width in pixels, always within `[BrushSize::MIN, BrushSize::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;
    pub const DEFAULT: u8 = 5;

    /// Creates a size, clamping out-of-range values to the nearest bound.
    pub fn new(size: u8) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<u8> for BrushSize {
    fn from(size: u8) -> Self {
        Self::new(size)
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Tool, color and size chosen in the toolbar.
///
/// Owned by the app and handed by reference to the toolbar (which mutates
/// it) and to the stroke controller (which reads it for every segment).
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSettings {
    tool: Tool,
    color: Color32,
    size: BrushSize,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self::new(Tool::Pencil, Color32::BLACK, BrushSize::default())
    }
}

impl BrushSettings {
    pub fn new(tool: Tool, color: Color32, size: BrushSize) -> Self {
        Self { tool, color, size }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> BrushSize {
        self.size
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: u8) {
        self.size = BrushSize::new(size);
    }

    /// Style for the next segment rendered with the current selection.
    pub fn stroke_style(&self) -> StrokeStyle {
        self.tool.stroke_style(self)
    }

    pub fn composite_mode(&self) -> CompositeMode {
        self.tool.composite_mode()
    }
}
