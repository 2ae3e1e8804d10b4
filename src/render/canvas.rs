//! # Raster Canvas
//!
//! An 8-bit grayscale pixel buffer with just enough drawing operations to
//! paint barcodes: clear, fill, and axis-aligned rectangles with fractional
//! coordinates.
//!
//! ## Smoothing
//!
//! | Smoothing | Pixel written when |
//! |-----------|--------------------|
//! | off | the pixel's center lies inside the rectangle (hard edges) |
//! | on | always, blended by the fraction of the pixel the rectangle covers |
//!
//! Barcodes are drawn with smoothing off so a canvas only ever holds pure
//! black and pure white.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{GrayImage, ImageFormat, Luma};
use std::io::Cursor;
use std::path::Path;

use crate::error::{HangtagError, Result};

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 255;

/// A grayscale drawing surface of a fixed pixel size.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: GrayImage,
    smoothing: bool,
}

impl RasterCanvas {
    /// Create a white canvas. Smoothing starts enabled.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, Luma([WHITE])),
            smoothing: true,
        }
    }

    /// Set the pixel dimensions, discarding prior content.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = GrayImage::from_pixel(width, height, Luma([WHITE]));
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    pub fn set_smoothing(&mut self, enabled: bool) {
        self.smoothing = enabled;
    }

    /// Fill the whole canvas with one gray level.
    pub fn fill(&mut self, color: u8) {
        for pixel in self.image.pixels_mut() {
            *pixel = Luma([color]);
        }
    }

    /// Fill the rectangle `[x, x + w) × [y, y + h)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: u8) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = (x.max(0.0), (x + w).min(self.width() as f64));
        let (y0, y1) = (y.max(0.0), (y + h).min(self.height() as f64));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let cols = x0.floor() as u32..x1.ceil() as u32;
        let rows = y0.floor() as u32..y1.ceil() as u32;

        for py in rows {
            let cover_y = overlap(py, y0, y1);
            for px in cols.clone() {
                let cover_x = overlap(px, x0, x1);
                let pixel = self.image.get_pixel_mut(px, py);
                if self.smoothing {
                    let coverage = cover_x * cover_y;
                    let blended = pixel[0] as f64 * (1.0 - coverage) + color as f64 * coverage;
                    *pixel = Luma([blended.round() as u8]);
                } else if contains_center(px, x0, x1) && contains_center(py, y0, y1) {
                    *pixel = Luma([color]);
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y)[0]
    }

    /// Whether every pixel is pure black or pure white.
    pub fn is_monochrome(&self) -> bool {
        self.image.pixels().all(|p| p[0] == BLACK || p[0] == WHITE)
    }

    /// Count pure black pixels.
    pub fn black_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p[0] == BLACK).count()
    }

    /// Encode the canvas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut png_bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| HangtagError::Image(format!("PNG encoding failed: {}", e)))?;
        Ok(png_bytes)
    }

    /// Encode the canvas as a `data:image/png;base64,...` URI.
    pub fn to_data_uri(&self) -> Result<String> {
        Ok(format!("data:image/png;base64,{}", BASE64.encode(self.to_png()?)))
    }

    /// Save the canvas as a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| HangtagError::Image(format!("Failed to save PNG: {}", e)))
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

/// Fraction of pixel `p` (spanning `[p, p + 1)`) covered by `[lo, hi)`.
fn overlap(p: u32, lo: f64, hi: f64) -> f64 {
    let start = (p as f64).max(lo);
    let end = (p as f64 + 1.0).min(hi);
    (end - start).max(0.0)
}

fn contains_center(p: u32, lo: f64, hi: f64) -> bool {
    let center = p as f64 + 0.5;
    center >= lo && center < hi
}
