//! Label document handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::document::PrintDocument;
use crate::label::Product;

use super::super::state::{AppState, DOCUMENT_EXPIRATION_SECS, StoredDocument};

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Body for label endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LabelRequest {
    /// Product records sent inline
    #[serde(default)]
    pub products: Vec<Product>,
    /// Product IDs to fetch from the catalog (printed before inline products)
    #[serde(default)]
    pub ids: Vec<String>,
    /// Override the configured auto-print setting
    pub auto_print: Option<bool>,
}

/// POST /api/labels - Assemble and store a print document.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LabelRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let doc = assemble(&state, request).await?;

    let id = Uuid::new_v4();
    state
        .documents
        .write()
        .await
        .insert(id, StoredDocument::new(doc.to_html()));

    log::info!("stored print document {} ({} labels)", id, doc.labels.len());

    Ok(Json(serde_json::json!({
        "success": true,
        "id": id.to_string(),
        "url": format!("/labels/{}", id),
        "labels": doc.labels.len(),
        "invalid": doc.invalid_count(),
    })))
}

/// POST /api/labels/preview - Assemble and return HTML directly.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LabelRequest>,
) -> Result<Html<String>, ApiError> {
    let doc = assemble(&state, request).await?;
    Ok(Html(doc.to_html()))
}

/// GET /labels/:id - Serve a stored print document.
pub async fn show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return error(StatusCode::BAD_REQUEST, "Invalid document ID").into_response();
    };

    let expiration = Duration::from_secs(DOCUMENT_EXPIRATION_SECS);
    let documents = state.documents.read().await;
    match documents.get(&id) {
        // The sweep may not have run yet
        Some(doc) if !doc.is_expired(Instant::now(), expiration) => {
            Html(doc.html.clone()).into_response()
        }
        _ => error(StatusCode::NOT_FOUND, "Document not found or expired").into_response(),
    }
}

/// Resolve products and assemble the document.
async fn assemble(state: &AppState, request: LabelRequest) -> Result<PrintDocument, ApiError> {
    let mut products = Vec::new();

    if !request.ids.is_empty() {
        let catalog = state.catalog.as_ref().ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                "Product IDs given but no catalog is configured",
            )
        })?;
        let fetched = catalog.products(&request.ids).await.map_err(|e| {
            log::warn!("catalog fetch failed: {}", e);
            error(StatusCode::BAD_GATEWAY, &e.to_string())
        })?;
        products.extend(fetched);
    }
    products.extend(request.products);

    if products.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "No products given"));
    }

    let mut config = state.config.label.clone();
    if let Some(auto_print) = request.auto_print {
        config.auto_print = auto_print;
    }

    // CPU-bound: runs on the blocking pool
    tokio::task::spawn_blocking(move || PrintDocument::assemble(&products, &config))
        .await
        .map_err(|e| error(StatusCode::INTERNAL_SERVER_ERROR, &format!("Task error: {}", e)))
}

fn error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(serde_json::json!({"success": false, "error": message})),
    )
}
