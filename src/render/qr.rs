//! QR code rasterizer.
//!
//! Labels normally point their QR image at a remote generator. When a label
//! is built with an embedded QR instead, the code is drawn here with the
//! `qrcode` crate and shipped inline as a PNG.

use qrcode::{EcLevel, QrCode};

use super::canvas::{BLACK, RasterCanvas};
use crate::error::{HangtagError, Result};

/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE: usize = 2;

/// Render `data` as a QR code fitted into a `size`×`size` canvas.
///
/// Cells are whole pixels (at least 1); the symbol is centered and any
/// leftover margin stays white.
pub fn render(data: &str, size: u32) -> Result<RasterCanvas> {
    let code = QrCode::with_error_correction_level(data, EcLevel::M)
        .map_err(|e| HangtagError::Image(format!("QR code generation failed: {}", e)))?;

    let modules = code.width();
    let total = modules + 2 * QUIET_ZONE;
    let cell_size = (size as usize / total).max(1);
    let pixel_size = total * cell_size;
    let canvas_size = (size as usize).max(pixel_size);
    let offset = (canvas_size - pixel_size) / 2 + QUIET_ZONE * cell_size;

    let mut canvas = RasterCanvas::new(canvas_size as u32, canvas_size as u32);
    canvas.set_smoothing(false);

    for qy in 0..modules {
        for qx in 0..modules {
            if code[(qx, qy)] == qrcode::Color::Dark {
                canvas.fill_rect(
                    (offset + qx * cell_size) as f64,
                    (offset + qy * cell_size) as f64,
                    cell_size as f64,
                    cell_size as f64,
                    BLACK,
                );
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_requested_size() {
        let canvas = render("A00001", 100).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (100, 100));
        assert!(canvas.is_monochrome());
        assert!(canvas.black_pixels() > 0);
    }

    #[test]
    fn test_grows_when_too_small() {
        // Version 1 is 21 modules + quiet zone; cannot fit in 10px
        let canvas = render("A", 10).unwrap();
        assert_eq!(canvas.width(), 25);
        assert_eq!(canvas.width(), canvas.height());
    }

    #[test]
    fn test_corners_are_quiet() {
        let canvas = render("https://example.com/p/A00001", 120).unwrap();
        assert_eq!(canvas.pixel(0, 0), 255);
        assert_eq!(canvas.pixel(canvas.width() - 1, canvas.height() - 1), 255);
    }
}
