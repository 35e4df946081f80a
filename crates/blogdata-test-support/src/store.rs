//! Test stores — mock `ContentStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use blogdata_core::error::ContentError;
use blogdata_core::store::{ContentEntry, ContentStore};

/// A content store backed by in-memory collections. Records every
/// `get_collection` call.
///
/// Requesting a collection that was never added fails with
/// `ContentError::ContentUnavailable`.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    collections: HashMap<String, Vec<ContentEntry>>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryContentStore {
    /// Create a store with no collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a collection, returning the store.
    #[must_use]
    pub fn with_collection(mut self, name: &str, entries: Vec<ContentEntry>) -> Self {
        self.collections.insert(name.to_owned(), entries);
        self
    }

    /// Returns the names passed to `get_collection`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_collections(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError> {
        self.requested.lock().unwrap().push(name.to_owned());
        self.collections
            .get(name)
            .cloned()
            .ok_or_else(|| ContentError::unavailable(name, "collection does not exist"))
    }
}

/// A content store that always fails. Useful for testing error-handling
/// paths.
#[derive(Debug)]
pub struct FailingContentStore {
    error: Option<ContentError>,
}

impl FailingContentStore {
    /// Create a store that returns a clone of `error` on every call.
    #[must_use]
    pub fn new(error: ContentError) -> Self {
        Self { error: Some(error) }
    }

    /// Create a store that reports the requested collection as unavailable,
    /// as if the backend were offline.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { error: None }
    }
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn get_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Err(ContentError::unavailable(name, "connection refused")),
        }
    }
}
