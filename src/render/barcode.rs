//! # Barcode Rasterizer
//!
//! Paints an [`EncodedMessage`] onto a [`RasterCanvas`].
//!
//! ## Algorithm
//!
//! ```text
//! pattern   = concat(PATTERNS[v] for v in message)
//! bar_width = width / pattern.len()             (not rounded)
//! for each '1' at index i:
//!     fill [i × bar_width, i × bar_width + ceil(bar_width)) × [0, height)
//! ```
//!
//! Rounding the rectangle width up means neighbouring bars can overlap by a
//! pixel, so a run of bars never shows a hairline white seam. Smoothing is
//! turned off first, which keeps every pixel pure black or white even when
//! `bar_width` is fractional.

use serde::{Deserialize, Serialize};

use super::canvas::{BLACK, RasterCanvas, WHITE};
use crate::barcode::EncodedMessage;
use crate::error::Result;

/// Target barcode size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeSize {
    pub width: u32,
    pub height: u32,
}

impl BarcodeSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for BarcodeSize {
    /// 250×40, the hang-tag barcode slot.
    fn default() -> Self {
        Self::new(250, 40)
    }
}

/// Draw `message` onto `canvas`, resizing it to exactly `size`.
///
/// Any prior canvas content is discarded.
pub fn rasterize(canvas: &mut RasterCanvas, message: &EncodedMessage, size: BarcodeSize) -> Result<()> {
    let pattern = message.modules()?;

    canvas.resize(size.width, size.height);
    canvas.set_smoothing(false);
    canvas.fill(WHITE);

    let bar_width = size.width as f64 / pattern.len() as f64;
    let rect_width = bar_width.ceil();
    let height = size.height as f64;

    for (i, bit) in pattern.bytes().enumerate() {
        if bit == b'1' {
            canvas.fill_rect(i as f64 * bar_width, 0.0, rect_width, height, BLACK);
        }
    }

    Ok(())
}

/// Render `message` onto a fresh canvas of `size`.
pub fn render(message: &EncodedMessage, size: BarcodeSize) -> Result<RasterCanvas> {
    let mut canvas = RasterCanvas::new(size.width, size.height);
    rasterize(&mut canvas, message, size)?;
    Ok(canvas)
}
