//! Server state and configuration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::ProductSource;
use crate::config::LabelConfig;

/// How long an assembled print document stays available.
pub const DOCUMENT_EXPIRATION_SECS: u64 = 10 * 60;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Storefront backend base URL for fetching products by ID
    pub catalog_url: Option<String>,
    /// Label settings applied to every batch
    pub label: LabelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            catalog_url: None,
            label: LabelConfig::default(),
        }
    }
}

/// An assembled document waiting to be opened in a print tab.
pub struct StoredDocument {
    pub html: String,
    pub created: Instant,
}

impl StoredDocument {
    pub fn new(html: String) -> Self {
        Self {
            html,
            created: Instant::now(),
        }
    }

    /// Whether the document is at least `expiration` old at `now`.
    pub fn is_expired(&self, now: Instant, expiration: Duration) -> bool {
        now.saturating_duration_since(self.created) >= expiration
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Upstream product source, when a catalog URL is configured
    pub catalog: Option<Arc<dyn ProductSource>>,
    /// Print documents keyed by batch ID
    pub documents: RwLock<HashMap<Uuid, StoredDocument>>,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Option<Arc<dyn ProductSource>>) -> Self {
        Self {
            config,
            catalog,
            documents: RwLock::new(HashMap::new()),
        }
    }
}
