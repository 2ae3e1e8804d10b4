//! # Label Pipeline Tests
//!
//! End-to-end checks from raw product data to the printed HTML page.
//!
//! ## Test Coverage
//!
//! - **Encoding**: known SKUs against hand-checked code value sequences
//! - **Rasterizing**: canvas size and black/white content at label sizes
//! - **Documents**: the fixture batch, including an invalid product

use hangtag::barcode::{self, ChecksumSymbol, Encoder, MAX_DATA_LEN};
use hangtag::catalog::{FileCatalog, ProductSource};
use hangtag::config::LabelConfig;
use hangtag::document::PrintDocument;
use hangtag::label::{Label, QrSource};
use hangtag::render::barcode::{BarcodeSize, render};
use pretty_assertions::assert_eq;

/// Path to the product fixture
const PRODUCTS_FIXTURE: &str = "tests/fixtures/products.json";

/// Known encodings, checked by hand against the Code 128 checksum formula.
const KNOWN_ENCODINGS: &[(&str, &[u8])] = &[
    ("", &[104, 17, 106]),
    ("A", &[104, 33, 34, 106]),
    (
        "A00001_ffffff_S",
        &[104, 33, 16, 16, 16, 16, 17, 63, 70, 70, 70, 70, 70, 70, 63, 51, 60, 106],
    ),
    ("A00002", &[104, 33, 16, 16, 16, 16, 18, 57, 106]),
    (
        "A000021f3a5fXL",
        &[104, 33, 16, 16, 16, 16, 18, 17, 70, 19, 65, 21, 70, 56, 44, 58, 106],
    ),
];

// ============================================================================
// ENCODING
// ============================================================================

#[test]
fn test_known_encodings() {
    for (data, expected) in KNOWN_ENCODINGS {
        let message = barcode::encode(data);
        assert_eq!(message.values(), *expected, "data {:?}", data);
    }
}

#[test]
fn test_hash_separated_sku_sanitizes_like_fixture() {
    let message = barcode::encode("A00002#1f3a5f#XL");
    assert_eq!(message.data(), "A000021f3a5fXL");
}

#[test]
fn test_long_skus_collide_after_truncation() {
    let a = barcode::encode("LONGPRODUCTIDENTIFIER_000000_S");
    let b = barcode::encode("LONGPRODUCTIDENTIFIER_ffffff_XL");
    assert_eq!(a.data().len(), MAX_DATA_LEN);
    assert_eq!(a, b);
    assert_eq!(
        a.values(),
        &[104, 44, 47, 46, 39, 48, 50, 47, 36, 53, 35, 52, 41, 36, 37, 46, 52, 41, 38, 41, 37, 31, 106]
    );
}

#[test]
fn test_checksum_modes_differ_outside_26_to_93() {
    let key = Encoder::with_checksum_symbol(ChecksumSymbol::TableKey);
    let value = Encoder::with_checksum_symbol(ChecksumSymbol::CodeValue);

    let data = "ab"; // checksum 95
    assert_ne!(key.encode(data), value.encode(data));
    assert_eq!(key.encode(data).checksum(), value.encode(data).checksum());

    let data = "A00001_ffffff_S"; // checksum 60
    assert_eq!(key.encode(data), value.encode(data));

    let data = ""; // checksum 1
    assert_eq!(key.encode(data).values(), &[104, 17, 106]);
    assert_eq!(value.encode(data).values(), &[104, 1, 106]);
}

// ============================================================================
// RASTERIZING
// ============================================================================

#[test]
fn test_label_barcode_canvas() {
    let message = barcode::encode("A00001_ffffff_S ");
    let canvas = render(&message, BarcodeSize::new(250, 40)).unwrap();

    assert_eq!((canvas.width(), canvas.height()), (250, 40));
    assert!(canvas.is_monochrome());
    assert!(canvas.black_pixels() > 0);
}

#[test]
fn test_many_sizes_stay_monochrome() {
    let message = barcode::encode("A000021f3a5fXL");
    for (w, h) in [(1, 1), (50, 10), (187, 40), (250, 40), (640, 120)] {
        let canvas = render(&message, BarcodeSize::new(w, h)).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (w, h));
        assert!(canvas.is_monochrome(), "{}x{}", w, h);
    }
}

#[test]
fn test_png_decodes_to_same_size() {
    let canvas = render(&barcode::encode("A00003"), BarcodeSize::default()).unwrap();
    let png = canvas.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (250, 40));
}

// ============================================================================
// DOCUMENTS
// ============================================================================

#[tokio::test]
async fn test_fixture_batch() {
    let products = FileCatalog::new(PRODUCTS_FIXTURE)
        .products(&[])
        .await
        .unwrap();
    assert_eq!(products.len(), 4);

    let doc = PrintDocument::assemble(&products, &LabelConfig::default());
    assert_eq!(doc.labels.len(), 4);
    assert_eq!(doc.valid_count(), 3);
    assert!(matches!(doc.labels[3], Label::Invalid { .. }));

    let Label::Tag(jacket) = &doc.labels[1] else {
        panic!("expected a tag for the jacket");
    };
    assert_eq!(jacket.barcode_data, "A000021f3a5fXL");
    assert_eq!(jacket.color_hex.as_deref(), Some("#1f3a5f"));

    let html = doc.to_html();
    assert!(html.contains("1.250.000 ₫"));
    assert!(html.contains("Silk Scarf &lt;limited&gt;"));
    assert!(html.contains("background:#c0392b"));
    assert!(html.contains("invalid data"));
    assert_eq!(html.matches("<section class=\"label\"").count(), 3);
}

#[test]
fn test_embedded_qr_needs_no_network() {
    let products = FileCatalog::new(PRODUCTS_FIXTURE).load().unwrap();
    let config = LabelConfig {
        qr: QrSource::Embedded,
        auto_print: false,
        ..Default::default()
    };
    let html = PrintDocument::assemble(&products, &config).to_html();
    assert!(!html.contains("https://"));
    assert!(!html.contains("window.print()"));
}

#[test]
fn test_save_document() {
    let products = FileCatalog::new(PRODUCTS_FIXTURE).load().unwrap();
    let doc = PrintDocument::assemble(&products[..1], &LabelConfig::default());

    let path = std::env::temp_dir().join(format!("hangtag-labels-{}.html", std::process::id()));
    doc.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Linen Shirt"));
    std::fs::remove_file(path).ok();
}
