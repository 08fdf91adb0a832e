//! Application state shared across handlers.

use std::sync::Arc;

use maison_core::alert::AlertCenter;
use maison_core::overlay::OverlayRegistry;
use tokio::sync::RwLock;

use crate::backend::BackendClient;
use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Overlay visibility and the active alert live here rather than in globals;
/// both are process-local and reset on restart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
    overlays: RwLock<OverlayRegistry>,
    alerts: RwLock<AlertCenter>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(&config.backend);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                overlays: RwLock::new(OverlayRegistry::new()),
                alerts: RwLock::new(AlertCenter::new()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    #[must_use]
    pub fn overlays(&self) -> &RwLock<OverlayRegistry> {
        &self.inner.overlays
    }

    #[must_use]
    pub fn alerts(&self) -> &RwLock<AlertCenter> {
        &self.inner.alerts
    }
}
