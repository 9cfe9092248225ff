use crate::surface::Surface;
use egui::{Color32, ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// Keeps the GPU copy of the canvas raster in sync with the surface.
///
/// The raster is re-uploaded only when the surface generation changes.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// Surface generation the texture was last uploaded from
    uploaded_generation: Option<u64>,
    upload_count: usize,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the texture no longer matches the surface
    pub fn is_stale(&self, surface: &Surface) -> bool {
        self.uploaded_generation != Some(surface.generation())
    }

    /// Gets the texture for the surface, uploading the raster if it changed
    pub fn texture_id(&mut self, ctx: &Context, surface: &Surface) -> TextureId {
        let stale = self.is_stale(surface);
        let handle = self.handle.get_or_insert_with(|| {
            ctx.load_texture(
                "canvas",
                ColorImage::new(surface.size(), Color32::TRANSPARENT),
                TextureOptions::NEAREST,
            )
        });
        if stale {
            handle.set(to_color_image(surface), TextureOptions::NEAREST);
            self.upload_count += 1;
        }
        self.uploaded_generation = Some(surface.generation());
        handle.id()
    }

    /// Number of raster uploads so far
    pub fn upload_count(&self) -> usize {
        self.upload_count
    }
}

/// Copies the raster into an egui image
pub fn to_color_image(surface: &Surface) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(surface.size(), surface.raster().as_raw())
}
