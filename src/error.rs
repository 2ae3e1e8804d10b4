//! # Error Types
//!
//! This module defines error types used throughout the hangtag library.

use thiserror::Error;

/// Main error type for hangtag operations
#[derive(Debug, Error)]
pub enum HangtagError {
    /// A code value outside the 0-106 pattern table reached the rasterizer
    #[error("Invalid code value: {0} (expected 0-106)")]
    InvalidCodeValue(u8),

    /// Image encoding or decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Product catalog (upstream REST backend or file) error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid configuration file or value
    #[error("Config error: {0}")]
    Config(String),

    /// Transport-level errors (socket bind, server)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HangtagError>;
