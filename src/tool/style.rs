use egui::Color32;

/// How newly rendered pixels combine with the pixels already on the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint over (source-over).
    #[default]
    Normal,
    /// Remove existing pixels under the stroke (destination-out).
    Erase,
}

/// Shape drawn at the ends of each segment. Round caps also close the
/// joints between consecutive segments of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Round,
}

/// Styling applied to a single rendered segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Round-capped style
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color32::BLACK, 5.0)
    }
}
