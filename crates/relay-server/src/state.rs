//! Application state shared across handlers.

use relay_engine::ModelRegistry;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable model registry, built once at startup. Read-only, so it is
    /// shared across concurrent requests without locking.
    pub registry: Arc<ModelRegistry>,
}
