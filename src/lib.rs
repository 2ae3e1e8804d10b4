//! # Hangtag - Product Label Printing
//!
//! Hangtag prints hang-tag labels for a clothing storefront. It provides:
//!
//! - **Barcode encoding**: Code 128 subset B with SKU sanitization
//! - **Rasterizing**: pixel-exact black/white barcodes at any canvas size
//! - **Labels**: product fields, barcode and QR code per product
//! - **Print documents**: one HTML page per batch, ready for the browser's
//!   print dialog
//! - **Catalog**: product records from a JSON file or the storefront backend
//! - **Server**: HTTP endpoints for barcode images and print documents
//!
//! ## Quick Start
//!
//! ```
//! use hangtag::{barcode, render::barcode::{render, BarcodeSize}};
//!
//! // Sanitize and encode a SKU
//! let message = barcode::encode("A00001_ffffff_S ");
//! assert_eq!(message.data(), "A00001_ffffff_S");
//!
//! // Rasterize onto a 250x40 canvas
//! let canvas = render(&message, BarcodeSize::new(250, 40))?;
//! let png = canvas.to_png()?;
//! assert!(!png.is_empty());
//!
//! # Ok::<(), hangtag::error::HangtagError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`barcode`] | Code 128 tables, sanitizer, encoder |
//! | [`render`] | Canvas, barcode and QR rasterizers |
//! | [`label`] | Products, SKUs, label fields |
//! | [`document`] | HTML print document assembly |
//! | [`catalog`] | Product sources |
//! | [`config`] | Label configuration |
//! | [`server`] | HTTP server |
//! | [`error`] | Error types |

pub mod barcode;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod label;
pub mod render;
pub mod server;

// Re-exports for convenience
pub use config::LabelConfig;
pub use document::PrintDocument;
pub use error::HangtagError;
pub use label::{Label, Product};
