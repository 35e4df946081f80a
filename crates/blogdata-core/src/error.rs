//! Content error types.

use thiserror::Error;

/// Top-level error type for loading content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A collection could not be loaded: it is missing, unreadable, or the
    /// backing store is offline.
    #[error("content unavailable for collection '{collection}': {reason}")]
    ContentUnavailable {
        /// The collection that was requested.
        collection: String,
        /// Why the collection could not be loaded.
        reason: String,
    },

    /// An entry does not have the required shape.
    #[error("malformed entry '{entry}': {reason}")]
    MalformedEntry {
        /// The entry identifier or source path.
        entry: String,
        /// What is wrong with the entry.
        reason: String,
    },
}

impl ContentError {
    /// Shorthand for a `ContentUnavailable` error.
    #[must_use]
    pub fn unavailable(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a `MalformedEntry` error.
    #[must_use]
    pub fn malformed(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}
