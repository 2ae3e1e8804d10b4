//! QR image source for labels.
//!
//! Each label carries a QR code keyed on the product ID. By default the image
//! is fetched by the browser from a third-party generator; `Embedded` draws
//! it locally so the print document works offline.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{HangtagError, Result};
use crate::render::qr;

/// Default third-party QR image service.
pub const DEFAULT_QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QrSource {
    /// `<img src>` points at an image-generation URL
    Remote { base_url: String },
    /// PNG rendered locally and inlined as a data URI
    Embedded,
}

impl Default for QrSource {
    fn default() -> Self {
        QrSource::Remote {
            base_url: DEFAULT_QR_SERVICE.to_string(),
        }
    }
}

impl QrSource {
    /// Image `src` for a product's QR code.
    pub fn image_src(&self, product_id: &str, size: u32) -> Result<String> {
        match self {
            QrSource::Remote { base_url } => qr_url(base_url, product_id, size),
            QrSource::Embedded => qr::render(product_id, size)?.to_data_uri(),
        }
    }
}

/// Build `{base_url}?size={size}x{size}&data={product_id}` with proper escaping.
pub fn qr_url(base_url: &str, product_id: &str, size: u32) -> Result<String> {
    let dimensions = format!("{}x{}", size, size);
    let url = Url::parse_with_params(base_url, &[("size", dimensions.as_str()), ("data", product_id)])
        .map_err(|e| HangtagError::Config(format!("Invalid QR service URL '{}': {}", base_url, e)))?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url() {
        let src = QrSource::default().image_src("A00001", 80).unwrap();
        assert_eq!(
            src,
            "https://api.qrserver.com/v1/create-qr-code/?size=80x80&data=A00001"
        );
    }

    #[test]
    fn test_remote_url_escapes_id() {
        let src = qr_url(DEFAULT_QR_SERVICE, "A1#ff&S", 64).unwrap();
        assert!(src.ends_with("data=A1%23ff%26S"), "{}", src);
    }

    #[test]
    fn test_bad_base_url() {
        assert!(qr_url("not a url", "A1", 64).is_err());
    }

    #[test]
    fn test_embedded_is_data_uri() {
        let src = QrSource::Embedded.image_src("A00001", 80).unwrap();
        assert!(src.starts_with("data:image/png;base64,"));
    }
}
