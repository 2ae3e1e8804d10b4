//! Barcode API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::barcode::{Encoder, sanitize};
use crate::render::{BarcodeSize, barcode};

use super::super::state::AppState;

/// Largest barcode edge the PNG endpoint will render.
const MAX_DIMENSION: u32 = 4096;

/// Encoding details returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct BarcodeInfo {
    pub data: String,
    pub sanitized: String,
    pub values: Vec<u8>,
    pub checksum: u8,
}

/// Query parameters for the PNG endpoint.
#[derive(Debug, Deserialize)]
pub struct PngQuery {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// GET /api/barcode/:data - Code values for sanitized data.
pub async fn encode(State(state): State<Arc<AppState>>, Path(data): Path<String>) -> Json<BarcodeInfo> {
    let sanitized = sanitize(&data).into_owned();
    let message = Encoder::with_checksum_symbol(state.config.label.checksum_symbol).encode(&sanitized);

    Json(BarcodeInfo {
        data,
        sanitized,
        values: message.values().to_vec(),
        checksum: message.checksum(),
    })
}

/// GET /api/barcode/:data/png - Render a barcode PNG.
pub async fn png(
    State(state): State<Arc<AppState>>,
    Path(data): Path<String>,
    Query(query): Query<PngQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let defaults = state.config.label.barcode;
    let size = BarcodeSize::new(
        query.width.unwrap_or(defaults.width),
        query.height.unwrap_or(defaults.height),
    );
    if size.width == 0 || size.height == 0 || size.width > MAX_DIMENSION || size.height > MAX_DIMENSION {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Barcode size must be between 1 and {} pixels, got {}x{}",
                MAX_DIMENSION, size.width, size.height
            ),
        ));
    }

    let message = Encoder::with_checksum_symbol(state.config.label.checksum_symbol)
        .encode_sanitized(&data);

    let png_bytes = barcode::render(&message, size)
        .and_then(|canvas| canvas.to_png())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}
