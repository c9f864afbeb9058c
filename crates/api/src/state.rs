use std::sync::Arc;

use gallery_stats::StatsClient;
use gallery_store::PromptStore;

use crate::config::ServerConfig;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// JSON-file prompt store.
    pub store: Arc<PromptStore>,
    /// Stats facade; may be running in degraded mode.
    pub stats: StatsClient,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
