//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostStore;
use postboard_infra::InMemoryPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state around the seeded in-memory store.
    pub fn new() -> Self {
        tracing::info!("Application state initialized (in-memory post store, not persisted)");
        Self::with_store(Arc::new(InMemoryPostStore::seeded()))
    }

    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
