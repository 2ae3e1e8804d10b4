//! # Rendering Module
//!
//! Turns encoded barcodes and QR codes into pixels.
//!
//! ## Modules
//!
//! - [`canvas`]: Grayscale drawing surface with PNG / data URI export
//! - [`barcode`]: Code 128 rasterizer
//! - [`qr`]: QR code rasterizer for locally rendered label QR codes
//!
//! ## Usage Example
//!
//! ```
//! use hangtag::barcode;
//! use hangtag::render::barcode::{render, BarcodeSize};
//!
//! let message = barcode::encode("A00001_ffffff_S");
//! let canvas = render(&message, BarcodeSize::new(250, 40)).unwrap();
//!
//! assert_eq!((canvas.width(), canvas.height()), (250, 40));
//! assert!(canvas.is_monochrome());
//! ```

pub mod barcode;
pub mod canvas;
pub mod qr;

pub use barcode::{BarcodeSize, rasterize};
pub use canvas::RasterCanvas;
