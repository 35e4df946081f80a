//! Query abstractions.

use uuid::Uuid;

/// Trait that all queries implement.
pub trait Query: Send + Sync + std::fmt::Debug {
    /// The type name for this query (for logging/routing).
    fn query_type(&self) -> &'static str;

    /// Correlation ID to trace this query through the system.
    fn correlation_id(&self) -> Uuid;
}
