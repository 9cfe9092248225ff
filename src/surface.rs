//! The drawing surface: a fixed-size RGBA raster plus the current stroke path.
//!
//! Segments are rasterised one at a time with anti-aliased edges. Coverage of
//! a pixel is measured from its center, so a pixel whose center lies at least
//! half a pixel inside the stroke edge is fully covered and a pixel whose
//! center lies half a pixel or more outside it is never touched.

use crate::error::ExportResult;
use crate::tool::{CompositeMode, LineCap, StrokeStyle};
use egui::{Color32, Pos2};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Owns the canvas raster and the path of the stroke being drawn.
#[derive(Debug, Clone)]
pub struct Surface {
    raster: RgbaImage,
    /// End of the active path, `None` when no path is open
    cursor: Option<Pos2>,
    /// Last segment rendered on the active path and its mode
    previous: Option<(SegmentShape, CompositeMode)>,
    /// Bumped on every raster mutation
    generation: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Surface {
    /// Creates a fully transparent surface. Zero dimensions are raised to one
    /// pixel so every operation has a buffer to work on.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: RgbaImage::from_pixel(width.max(1), height.max(1), TRANSPARENT),
            cursor: None,
            previous: None,
            generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// `[width, height]` in pixels
    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Unmultiplied RGBA of a pixel, `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.raster.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// True when no pixel has any opacity.
    pub fn is_blank(&self) -> bool {
        self.raster.pixels().all(|p| p[3] == 0)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a path is open for [`Surface::extend_stroke`].
    pub fn has_active_path(&self) -> bool {
        self.cursor.is_some()
    }

    /// Resets the active path to `point`. Nothing is rendered.
    pub fn begin_stroke(&mut self, point: Pos2) {
        self.cursor = Some(point);
        self.previous = None;
    }

    /// Renders a segment from the end of the active path to `point` and
    /// continues the path from there.
    ///
    /// Pixels the previous segment of the path already covered only receive
    /// the coverage they are missing, so joints look like one continuous
    /// stroke instead of two overlapping ones.
    ///
    /// Without an active path this only opens one at `point`.
    /// Returns true if any pixel changed.
    pub fn extend_stroke(&mut self, point: Pos2, style: &StrokeStyle, mode: CompositeMode) -> bool {
        let Some(from) = self.cursor.replace(point) else {
            return false;
        };

        let half_width = style.half_width();
        if half_width <= 0.0 {
            self.previous = None;
            return false;
        }

        let shape = SegmentShape::new(from, point, half_width, style.cap);
        let changed = self.render_segment(&shape, style.color, mode);
        self.previous = Some((shape, mode));
        if changed {
            self.generation += 1;
        }
        changed
    }

    /// Closes the active path.
    pub fn end_stroke(&mut self) {
        self.cursor = None;
        self.previous = None;
    }

    /// Makes every pixel fully transparent. An open path stays open.
    pub fn clear(&mut self) {
        for pixel in self.raster.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        // Nothing left on the raster for the next segment to overlap.
        self.previous = None;
        self.generation += 1;
    }

    /// Encodes the raster as PNG at its native resolution.
    pub fn export(&self) -> ExportResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.raster.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn render_segment(&mut self, shape: &SegmentShape, color: Color32, mode: CompositeMode) -> bool {
        // Only a joint drawn with the same operation can be merged.
        let joint = self
            .previous
            .filter(|(_, previous_mode)| *previous_mode == mode)
            .map(|(previous, _)| previous);

        // Pixels further than one pixel beyond the stroke edge get no coverage.
        let reach = shape.half_width + 1.0;
        let (min, max) = shape.bounds();
        let x0 = (min.x - reach).floor().max(0.0) as u32;
        let y0 = (min.y - reach).floor().max(0.0) as u32;
        let x1 = (max.x + reach).ceil().min(self.width() as f32) as u32;
        let y1 = (max.y + reach).ceil().min(self.height() as f32) as u32;

        let source = color.to_srgba_unmultiplied();
        let mut changed = false;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let mut coverage = shape.coverage(center);
                if let Some(previous) = &joint {
                    coverage = missing_coverage(coverage, previous.coverage(center));
                }
                if coverage <= 0.0 {
                    continue;
                }
                let pixel = self.raster.get_pixel_mut(x, y);
                let before = *pixel;
                match mode {
                    CompositeMode::Normal => blend_source_over(pixel, source, coverage),
                    CompositeMode::Erase => blend_destination_out(pixel, coverage),
                }
                changed |= *pixel != before;
            }
        }
        changed
    }
}

/// Geometry of one round-capped segment.
#[derive(Debug, Clone, Copy)]
struct SegmentShape {
    start: Pos2,
    end: Pos2,
    half_width: f32,
}

impl SegmentShape {
    fn new(from: Pos2, to: Pos2, half_width: f32, cap: LineCap) -> Self {
        match cap {
            LineCap::Round => Self {
                start: from,
                end: to,
                half_width,
            },
        }
    }

    fn bounds(&self) -> (Pos2, Pos2) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    /// Fraction of the pixel centered at `p` covered by the segment.
    fn coverage(&self, p: Pos2) -> f32 {
        let ab = self.end - self.start;
        let len_sq = ab.length_sq();
        let t = if len_sq > 0.0 {
            ((p - self.start).dot(ab) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let distance = (p - (self.start + ab * t)).length();
        (self.half_width + 0.5 - distance).clamp(0.0, 1.0)
    }
}

/// Coverage still to apply so that a pixel already blended with `applied`
/// ends up as if blended once with `max(wanted, applied)`.
fn missing_coverage(wanted: f32, applied: f32) -> f32 {
    if wanted <= applied {
        0.0
    } else {
        (wanted - applied) / (1.0 - applied)
    }
}

/// Paints `source` over `pixel`, weighted by `coverage`.
fn blend_source_over(pixel: &mut Rgba<u8>, source: [u8; 4], coverage: f32) {
    let src_alpha = coverage * f32::from(source[3]) / 255.0;
    if src_alpha <= 0.0 {
        return;
    }
    if src_alpha >= 1.0 {
        *pixel = Rgba([source[0], source[1], source[2], 255]);
        return;
    }

    let dst_alpha = f32::from(pixel[3]) / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        *pixel = TRANSPARENT;
        return;
    }
    let mix = |src: u8, dst: u8| {
        let value = (f32::from(src) * src_alpha + f32::from(dst) * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    let [r, g, b, _] = pixel.0;
    *pixel = Rgba([
        mix(source[0], r),
        mix(source[1], g),
        mix(source[2], b),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

/// Removes opacity from `pixel` in proportion to `coverage`.
fn blend_destination_out(pixel: &mut Rgba<u8>, coverage: f32) {
    if coverage >= 1.0 {
        *pixel = TRANSPARENT;
        return;
    }
    let alpha = (f32::from(pixel[3]) * (1.0 - coverage)).round() as u8;
    if alpha == 0 {
        *pixel = TRANSPARENT;
    } else {
        pixel[3] = alpha;
    }
}
