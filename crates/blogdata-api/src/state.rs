//! Shared application state.

use std::fmt;
use std::sync::Arc;

use blogdata_core::store::ContentStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of content collections.
    pub content_store: Arc<dyn ContentStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(content_store: Arc<dyn ContentStore>) -> Self {
        Self { content_store }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
