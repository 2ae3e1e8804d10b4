//! # Print Document
//!
//! Assembles a batch of labels into one self-contained HTML page that the
//! browser prints.
//!
//! Barcodes are rasterized here, ahead of time, and embedded as PNG data
//! URIs. The page itself carries no encoder script; its only script is the
//! optional `window.print()` trigger.
//!
//! ```
//! use hangtag::config::LabelConfig;
//! use hangtag::document::PrintDocument;
//! use hangtag::label::Product;
//!
//! let products = vec![Product {
//!     id: "A00001".into(),
//!     name: "Linen Shirt".into(),
//!     price: 450000,
//!     sku: Some("A00001_ffffff_S".into()),
//!     ..Default::default()
//! }];
//!
//! let doc = PrintDocument::assemble(&products, &LabelConfig::default());
//! assert_eq!(doc.valid_count(), 1);
//! assert!(doc.to_html().contains("A00001_ffffff_S"));
//! ```

mod html;

pub use html::escape;

use std::path::Path;

use crate::config::LabelConfig;
use crate::error::Result;
use crate::label::{Label, Product};

/// A batch of labels plus page-level settings.
#[derive(Debug, Clone)]
pub struct PrintDocument {
    pub title: String,
    pub labels: Vec<Label>,
    pub auto_print: bool,
    /// Footer timestamp, e.g. `2026-10-18 09:30`
    pub printed_at: String,
}

impl PrintDocument {
    /// Build one label per product, in order.
    pub fn assemble(products: &[Product], config: &LabelConfig) -> Self {
        let labels: Vec<Label> = products
            .iter()
            .map(|product| Label::build(product, config))
            .collect();

        let doc = Self {
            title: config.title.clone(),
            labels,
            auto_print: config.auto_print,
            printed_at: current_datetime(),
        };

        log::info!(
            "assembled {} labels ({} invalid)",
            doc.labels.len(),
            doc.invalid_count()
        );

        doc
    }

    pub fn valid_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.labels.len() - self.valid_count()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Render the full HTML page.
    pub fn to_html(&self) -> String {
        html::render(self)
    }

    /// Write the HTML page to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }
}

/// Local time formatted for the document footer.
pub fn current_datetime() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}
