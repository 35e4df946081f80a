//! Content store abstraction.

use async_trait::async_trait;

use crate::error::ContentError;

/// The validated data record of a content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryData {
    /// Entry title.
    pub title: String,
    /// Short summary of the entry.
    pub description: String,
}

/// One unit of content owned by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Identifier, unique within its collection.
    pub id: String,
    /// The entry's data record.
    pub data: EntryData,
}

impl ContentEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            data: EntryData {
                title: title.into(),
                description: description.into(),
            },
        }
    }
}

/// Read-only access to named collections of content entries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Load every entry in the named collection.
    ///
    /// Order is defined by the implementation.
    async fn get_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError>;
}
