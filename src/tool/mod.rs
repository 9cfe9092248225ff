//! Tool policy: which composite mode and stroke style a tool renders with.
//!
//! Pencil and brush render identically; the eraser removes pixels no matter
//! which color is selected.

mod style;

pub use style::{CompositeMode, LineCap, StrokeStyle};

use crate::state::BrushSettings;
use serde::{Deserialize, Serialize};

/// The drawing tools offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Brush,
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 3] = [Tool::Pencil, Tool::Brush, Tool::Eraser];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
        }
    }

    /// Glyph shown on the tool button.
    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Pencil => "✏",
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
        }
    }

    /// How segments drawn with this tool combine with the existing raster.
    pub fn composite_mode(&self) -> CompositeMode {
        match self {
            Tool::Pencil | Tool::Brush => CompositeMode::Normal,
            Tool::Eraser => CompositeMode::Erase,
        }
    }

    /// Style for the next segment drawn with this tool.
    ///
    /// The color is carried for every tool; under [`CompositeMode::Erase`]
    /// only the coverage of the stroke matters.
    pub fn stroke_style(&self, settings: &BrushSettings) -> StrokeStyle {
        StrokeStyle::new(settings.color(), f32::from(settings.size().get()))
    }
}
