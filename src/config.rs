//! # Label Configuration
//!
//! Settings that shape every label in a print batch. Loaded from a JSON file
//! (all fields optional) and then overridden by CLI flags.
//!
//! ```json
//! {
//!   "barcode": { "width": 250, "height": 40 },
//!   "qr_size": 80,
//!   "qr": { "kind": "embedded" },
//!   "currency": "₫",
//!   "checksum_symbol": "table-key",
//!   "auto_print": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::barcode::ChecksumSymbol;
use crate::error::{HangtagError, Result};
use crate::label::qr::QrSource;
use crate::render::BarcodeSize;

/// Default document title.
pub const DEFAULT_TITLE: &str = "Product labels";

/// Default currency suffix for prices.
pub const DEFAULT_CURRENCY: &str = "₫";

/// Per-batch label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Barcode canvas size in pixels
    pub barcode: BarcodeSize,
    /// QR image edge length in pixels
    pub qr_size: u32,
    /// Where label QR images come from
    pub qr: QrSource,
    /// Currency suffix appended to prices
    pub currency: String,
    /// How the barcode checksum symbol is chosen
    pub checksum_symbol: ChecksumSymbol,
    /// Open the print dialog as soon as the document loads
    pub auto_print: bool,
    /// Document title
    pub title: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            barcode: BarcodeSize::default(),
            qr_size: 80,
            qr: QrSource::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            checksum_symbol: ChecksumSymbol::default(),
            auto_print: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LabelConfig {
    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            HangtagError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
            .map_err(|e| HangtagError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that cannot hold a barcode.
    pub fn validate(&self) -> Result<()> {
        if self.barcode.width == 0 || self.barcode.height == 0 {
            return Err(HangtagError::Config(format!(
                "barcode size must be positive, got {}x{}",
                self.barcode.width, self.barcode.height
            )));
        }
        if self.qr_size == 0 {
            return Err(HangtagError::Config("qr_size must be positive".to_string()));
        }
        Ok(())
    }
}
