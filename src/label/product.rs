//! Product records and SKU parsing.
//!
//! Products arrive as JSON from the catalog backend. Variant SKUs follow
//! `baseId_colorHex_size`, e.g. `A00001_ffffff_S`; the storefront also uses
//! `#` as a separator (`A00001#ffffff#S`), so both are accepted here.

use serde::{Deserialize, Serialize};

/// A product record as served by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in whole currency units
    pub price: u64,
    pub material: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    /// Variant SKU; the barcode falls back to `id` when absent
    pub sku: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl Product {
    /// Raw barcode data before sanitization.
    pub fn barcode_data(&self) -> &str {
        self.sku.as_deref().unwrap_or(&self.id)
    }

    /// Parsed variant SKU, if the product has one in the expected shape.
    pub fn parsed_sku(&self) -> Option<Sku> {
        self.sku.as_deref().and_then(Sku::parse)
    }

    /// Display size: explicit field first, then the SKU suffix.
    pub fn display_size(&self) -> Option<String> {
        non_empty(self.size.as_deref())
            .map(str::to_string)
            .or_else(|| self.parsed_sku().map(|s| s.size))
    }

    /// Display color as `#rrggbb`: explicit field first, then the SKU.
    pub fn display_color(&self) -> Option<String> {
        non_empty(self.color.as_deref())
            .and_then(normalize_hex)
            .or_else(|| self.parsed_sku().map(|s| s.color_hex))
    }
}

/// A parsed `baseId_colorHex_size` SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sku {
    pub base_id: String,
    /// Normalized `#rrggbb`
    pub color_hex: String,
    pub size: String,
}

impl Sku {
    pub fn parse(raw: &str) -> Option<Sku> {
        let mut parts = raw.trim().split(['_', '#']).filter(|p| !p.is_empty());
        let base_id = parts.next()?;
        let color = parts.next()?;
        let size = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Sku {
            base_id: base_id.to_string(),
            color_hex: normalize_hex(color)?,
            size: size.to_uppercase(),
        })
    }
}

/// Normalize `fff`, `#FFFFFF`, `ffffff` to `#ffffff`.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let hex = raw.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = hex.to_ascii_lowercase();
    match hex.len() {
        6 => Some(format!("#{}", hex)),
        3 => Some(format!("#{}", hex.chars().flat_map(|c| [c, c]).collect::<String>())),
        _ => None,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
