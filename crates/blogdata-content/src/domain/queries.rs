//! Queries for the content context.

use blogdata_core::query::Query;
use uuid::Uuid;

/// Query listing every blog post as a client-facing projection.
#[derive(Debug, Clone)]
pub struct ListBlogPosts {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Query for ListBlogPosts {
    fn query_type(&self) -> &'static str {
        "content.list_blog_posts"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
