//! # Barcode Encoding
//!
//! Code 128 subset B, restricted to what a hang tag needs.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tables`] | Symbol and bar pattern tables |
//! | [`sanitize`] | Lossy input restriction to `[A-Za-z0-9_]`, 20 chars |
//! | [`code128`] | Encoder and checksum |

pub mod code128;
pub mod sanitize;
pub mod tables;

pub use code128::{ChecksumSymbol, EncodedMessage, Encoder, encode};
pub use sanitize::{MAX_DATA_LEN, sanitize};
