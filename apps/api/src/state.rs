use std::sync::Arc;

use crate::config::Config;
use crate::enhance::Enhancer;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable enhancement backend. Default: HeuristicEnhancer.
    pub enhancer: Arc<dyn Enhancer>,
    pub config: Config,
}
