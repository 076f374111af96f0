use std::path::Path;

use image::RgbaImage;

use crate::color::contrast::average;
use crate::color::def::Color;
use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{LintError, LintResult};

/// Raster capture of the screen taken at session start.
///
/// Pixels are straight-alpha RGBA8. The raster may be larger than the window (device scale); crops
/// are requested in window coordinates and scaled internally.
#[derive(Clone)]
pub struct Snapshot {
    image: RgbaImage,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Snapshot {
    /// Wrap an already-decoded image.
    pub fn from_image(image: image::DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
        }
    }

    /// Build from tightly packed, row-major RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> LintResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(LintError::snapshot(format!(
                "rgba8 buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        let image = RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| LintError::snapshot("rgba8 buffer does not match dimensions"))?;
        Ok(Self { image })
    }

    /// Solid-color raster, mostly useful for tests and synthetic sessions.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let px = image::Rgba(color.to_rgba8());
        Self {
            image: RgbaImage::from_pixel(width, height, px),
        }
    }

    /// Decode any format supported by `image` from disk.
    pub fn open(path: impl AsRef<Path>) -> LintResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| LintError::snapshot(format!("open '{}': {e}", path.display())))?;
        Ok(Self::from_image(img))
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutable access for producers that paint into the raster before the session starts.
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Color at pixel `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::from_rgba8(p[0], p[1], p[2], p[3]))
    }

    /// Pixels per window unit.
    pub fn scale_for(&self, window: Size) -> f64 {
        if window.width <= 0.0 || window.height <= 0.0 {
            return 1.0;
        }
        let sx = f64::from(self.width()) / window.width;
        let sy = f64::from(self.height()) / window.height;
        sx.max(sy)
    }

    /// Pixel-space rect covering `rect` (window coordinates), clipped to the raster bounds.
    ///
    /// Returns `(x, y, w, h)`; `None` when the clipped region is empty.
    pub fn pixel_bounds(&self, rect: Rect, window: Size) -> Option<(u32, u32, u32, u32)> {
        let s = self.scale_for(window);
        let x0 = (rect.x0 * s).floor().max(0.0);
        let y0 = (rect.y0 * s).floor().max(0.0);
        let x1 = (rect.x1 * s).ceil().min(f64::from(self.width()));
        let y1 = (rect.y1 * s).ceil().min(f64::from(self.height()));
        if !(x1 > x0 && y1 > y0) {
            return None;
        }
        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Copy of the region under `rect` (window coordinates), `None` when it falls off the raster
    /// or has no area.
    pub fn crop(&self, rect: Rect, window: Size) -> Option<RgbaImage> {
        let (x, y, w, h) = self.pixel_bounds(rect, window)?;
        Some(image::imageops::crop_imm(&self.image, x, y, w, h).to_image())
    }
}

/// Effective background color of a cropped region.
///
/// Averages four samples taken one pixel in from each corner; the exact corners tend to pick up
/// antialiasing from neighbouring content.
pub fn effective_background(region: &RgbaImage) -> Option<Color> {
    let (w, h) = region.dimensions();
    if w == 0 || h == 0 {
        return None;
    }
    let x_min = 1.min(w - 1);
    let y_min = 1.min(h - 1);
    let x_max = w.saturating_sub(2);
    let y_max = h.saturating_sub(2);

    let samples: Vec<Color> = [(x_min, y_min), (x_max, y_min), (x_min, y_max), (x_max, y_max)]
        .into_iter()
        .filter_map(|(x, y)| region.get_pixel_checked(x, y))
        .map(|p| Color::from_rgba8(p[0], p[1], p[2], p[3]))
        .collect();
    average(&samples)
}

#[cfg(test)]
#[path = "../tests/unit/snapshot.rs"]
mod tests;
