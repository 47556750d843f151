use std::sync::Arc;

use crate::backend::JobBackend;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static posting data; the only job source this build serves.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// Pluggable transport seam. This build wires the mock: fixed delays,
    /// unconditional success.
    pub backend: Arc<dyn JobBackend>,
    pub config: Config,
}
