//! # HTTP Server for Label Printing
//!
//! Serves barcode images and assembled print documents so the storefront's
//! back-office can open a batch of labels in a new browser tab and print it.
//!
//! ## Usage
//!
//! ```bash
//! hangtag serve --listen 0.0.0.0:8080 --catalog https://shop.example/api
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/barcode/:data` | JSON code values for sanitized data |
//! | GET | `/api/barcode/:data/png` | PNG barcode (`?width=&height=`) |
//! | POST | `/api/labels` | Stores a document, returns `{id, url}` |
//! | POST | `/api/labels/preview` | HTML document directly |
//! | GET | `/labels/:id` | Stored HTML document |

mod handlers;
mod state;

pub use state::{AppState, DOCUMENT_EXPIRATION_SECS, ServerConfig, StoredDocument};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{HttpCatalog, ProductSource};
use crate::error::{HangtagError, Result};

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/barcode/:data", get(handlers::barcode::encode))
        .route("/api/barcode/:data/png", get(handlers::barcode::png))
        .route("/api/labels", post(handlers::labels::create))
        .route("/api/labels/preview", post(handlers::labels::preview))
        .route("/labels/:id", get(handlers::labels::show))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use hangtag::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), hangtag::error::HangtagError> {
/// serve(ServerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<()> {
    let catalog = match &config.catalog_url {
        Some(url) => Some(Arc::new(HttpCatalog::new(url)?) as Arc<dyn ProductSource>),
        None => None,
    };
    let app_state = Arc::new(AppState::new(config.clone(), catalog));

    // Spawn background document cleanup task
    tokio::spawn(cleanup_documents(app_state.clone()));

    let app = router(app_state);

    log::info!("hangtag HTTP server listening on {}", config.listen_addr);
    match &config.catalog_url {
        Some(url) => log::info!("product catalog: {}", url),
        None => log::info!("no product catalog configured; POST products inline"),
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            HangtagError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| HangtagError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}

/// Background task that drops expired print documents.
async fn cleanup_documents(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    let expiration = Duration::from_secs(DOCUMENT_EXPIRATION_SECS);

    loop {
        interval.tick().await;
        let removed = sweep_expired(&state, Instant::now(), expiration).await;
        if removed > 0 {
            log::debug!("cleaned up {} expired print documents", removed);
        }
    }
}

/// Remove documents older than `expiration` at `now`. Returns how many went.
pub async fn sweep_expired(state: &AppState, now: Instant, expiration: Duration) -> usize {
    let mut documents = state.documents.write().await;
    let before = documents.len();
    documents.retain(|_, doc| !doc.is_expired(now, expiration));
    before - documents.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_sweep_expired() {
        let state = AppState::new(ServerConfig::default(), None);
        state
            .documents
            .write()
            .await
            .insert(Uuid::new_v4(), StoredDocument::new("<html></html>".into()));

        let start = Instant::now();
        assert_eq!(sweep_expired(&state, start, Duration::from_secs(60)).await, 0);

        let later = start + Duration::from_secs(61);
        assert_eq!(sweep_expired(&state, later, Duration::from_secs(60)).await, 1);
        assert!(state.documents.read().await.is_empty());
    }
}
