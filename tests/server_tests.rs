//! # Server Route Tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;
use uuid::Uuid;

use hangtag::catalog::ProductSource;
use hangtag::error::{HangtagError, Result};
use hangtag::label::Product;
use hangtag::server::{AppState, DOCUMENT_EXPIRATION_SECS, ServerConfig, StoredDocument, router};

/// In-memory catalog standing in for the storefront backend.
struct StubCatalog {
    products: Vec<Product>,
}

#[async_trait]
impl ProductSource for StubCatalog {
    async fn products(&self, ids: &[String]) -> Result<Vec<Product>> {
        ids.iter()
            .map(|id| {
                self.products
                    .iter()
                    .find(|p| &p.id == id)
                    .cloned()
                    .ok_or_else(|| HangtagError::Catalog(format!("Product '{}' not found", id)))
            })
            .collect()
    }
}

fn state(catalog: Option<Arc<dyn ProductSource>>) -> Arc<AppState> {
    Arc::new(AppState::new(ServerConfig::default(), catalog))
}

fn stub_catalog() -> Arc<dyn ProductSource> {
    Arc::new(StubCatalog {
        products: vec![Product {
            id: "A00001".into(),
            name: "Linen Shirt".into(),
            price: 450000,
            sku: Some("A00001_ffffff_S".into()),
            ..Default::default()
        }],
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_barcode_json() {
    let app = router(state(None));
    let response = app
        .oneshot(Request::get("/api/barcode/A00001_ffffff_S").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["sanitized"], "A00001_ffffff_S");
    assert_eq!(json["checksum"], 60);
    assert_eq!(json["values"][0], 104);
    assert_eq!(json["values"].as_array().unwrap().last().unwrap(), 106);
}

#[tokio::test]
async fn test_barcode_json_sanitizes() {
    let app = router(state(None));
    let response = app
        .oneshot(Request::get("/api/barcode/A1%23ff%23S").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"], "A1#ff#S");
    assert_eq!(json["sanitized"], "A1ffS");
}

#[tokio::test]
async fn test_barcode_png() {
    let app = router(state(None));
    let response = app
        .oneshot(
            Request::get("/api/barcode/A00001/png?width=300&height=60")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (300, 60));
}

#[tokio::test]
async fn test_barcode_png_rejects_zero_size() {
    let app = router(state(None));
    let response = app
        .oneshot(
            Request::get("/api/barcode/A00001/png?width=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_show_document() {
    let state = state(None);

    let response = router(state.clone())
        .oneshot(post_json(
            "/api/labels",
            r#"{"products": [{"id": "A1", "name": "Tee", "price": 99000, "sku": "A1_000000_M"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["labels"], 1);
    let url = json["url"].as_str().unwrap().to_string();

    let response = router(state)
        .oneshot(Request::get(url.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("A1_000000_M"));
    assert!(html.contains("99.000 ₫"));
}

#[tokio::test]
async fn test_show_unknown_document() {
    let app = router(state(None));
    let response = app
        .oneshot(
            Request::get("/labels/7f1d3c5e-2b4a-4c8e-9f00-0123456789ab")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = router(state(None));
    let response = app
        .oneshot(Request::get("/labels/not-a-uuid").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_expired_document_before_sweep() {
    let state = state(None);
    let id = Uuid::new_v4();
    let created = Instant::now()
        .checked_sub(Duration::from_secs(DOCUMENT_EXPIRATION_SECS + 1))
        .unwrap();
    state.documents.write().await.insert(
        id,
        StoredDocument {
            html: "<html>stale</html>".into(),
            created,
        },
    );

    let response = router(state.clone())
        .oneshot(Request::get(format!("/labels/{}", id)).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // Still stored; only the sweep removes it
    assert_eq!(state.documents.read().await.len(), 1);
}

#[tokio::test]
async fn test_preview_from_catalog() {
    let app = router(state(Some(stub_catalog())));
    let response = app
        .oneshot(post_json("/api/labels/preview", r#"{"ids": ["A00001"], "auto_print": false}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Linen Shirt"));
    assert!(!html.contains("window.print()"));
}

#[tokio::test]
async fn test_catalog_failure_is_bad_gateway() {
    let app = router(state(Some(stub_catalog())));
    let response = app
        .oneshot(post_json("/api/labels/preview", r#"{"ids": ["Z9"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_ids_without_catalog() {
    let app = router(state(None));
    let response = app
        .oneshot(post_json("/api/labels", r#"{"ids": ["A00001"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_request() {
    let app = router(state(None));
    let response = app.oneshot(post_json("/api/labels", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
