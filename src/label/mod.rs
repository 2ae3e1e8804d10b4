//! # Hang-Tag Labels
//!
//! One [`Label`] per product: name, computed fields, a Code 128 barcode and a
//! QR code.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Linen Shirt                  │
//! │ Size      S                  │
//! │ Color     ■ #ffffff          │
//! │ Price     450.000 ₫          │
//! │ Material  Linen              │
//! │ Brand     FashionHub         │
//! │ ▌▌▍▌▍▍▌▌▍▌▌▍▍▌▌▌▍    ▚▞▚▞    │
//! │ A00001_ffffff_S      ▞▚▞▚    │
//! └──────────────────────────────┘
//! ```
//!
//! A product whose barcode data sanitizes to nothing becomes
//! [`Label::Invalid`] so the rest of the batch still prints.

pub mod product;
pub mod qr;

pub use product::{Product, Sku};
pub use qr::QrSource;

use crate::barcode::{Encoder, sanitize};
use crate::config::LabelConfig;
use crate::error::Result;
use crate::render::barcode;

/// A name/value row printed on the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField {
    pub name: &'static str,
    pub value: String,
}

/// A label ready to be laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Tag(Tag),
    /// Placeholder for a product that could not be labelled
    Invalid { product_id: String, reason: String },
}

/// A valid label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub product_id: String,
    pub name: String,
    /// Sanitized barcode data, printed under the bars
    pub barcode_data: String,
    pub fields: Vec<LabelField>,
    /// `#rrggbb` swatch color, when known
    pub color_hex: Option<String>,
    /// PNG data URI of the barcode
    pub barcode_src: String,
    /// QR image `src` (remote URL or data URI)
    pub qr_src: String,
}

impl Label {
    /// Build the label for `product`.
    ///
    /// Never fails: problems become an [`Label::Invalid`] placeholder.
    pub fn build(product: &Product, config: &LabelConfig) -> Label {
        match Tag::build(product, config) {
            Ok(Some(tag)) => Label::Tag(tag),
            Ok(None) => {
                log::warn!("product {:?} has no usable barcode data", product.id);
                Label::Invalid {
                    product_id: product.id.clone(),
                    reason: "invalid data".to_string(),
                }
            }
            Err(e) => {
                log::warn!("label for product {:?} failed: {}", product.id, e);
                Label::Invalid {
                    product_id: product.id.clone(),
                    reason: format!("invalid data: {}", e),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Label::Tag(_))
    }
}

impl Tag {
    /// `Ok(None)` when the product has no barcode data after sanitization.
    fn build(product: &Product, config: &LabelConfig) -> Result<Option<Tag>> {
        let data = sanitize(product.barcode_data());
        if data.is_empty() || product.id.trim().is_empty() {
            return Ok(None);
        }

        let message = Encoder::with_checksum_symbol(config.checksum_symbol).encode(&data);
        let barcode_src = barcode::render(&message, config.barcode)?.to_data_uri()?;
        let qr_src = config.qr.image_src(&product.id, config.qr_size)?;

        Ok(Some(Tag {
            product_id: product.id.clone(),
            name: product.name.trim().to_string(),
            barcode_data: data.into_owned(),
            fields: fields(product, &config.currency),
            color_hex: product.display_color(),
            barcode_src,
            qr_src,
        }))
    }
}

/// Computed rows for a product. Rows with no value are omitted.
pub fn fields(product: &Product, currency: &str) -> Vec<LabelField> {
    let mut rows = Vec::new();
    let mut push = |name, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            rows.push(LabelField { name, value });
        }
    };

    push("Size", product.display_size());
    push("Color", product.display_color());
    push("Price", Some(format_price(product.price, currency)));
    push("Material", product.material.clone());
    push("Brand", product.brand.clone());

    rows
}

/// Format a price with `.` thousands separators: `1250000` → `1.250.000 ₫`.
pub fn format_price(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if currency.is_empty() {
        grouped
    } else {
        format!("{} {}", grouped, currency)
    }
}
