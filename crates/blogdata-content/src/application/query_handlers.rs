//! Query handlers for the content context.
//!
//! Handlers load entries through the `ContentStore` port and return
//! read-only projections.

use blogdata_core::error::ContentError;
use blogdata_core::query::Query;
use blogdata_core::store::ContentStore;
use tracing::debug;

use crate::domain::projection::{BLOG_COLLECTION, BlogPostProjection};
use crate::domain::queries::ListBlogPosts;

/// Lists every blog post, one projection per entry, in store order.
///
/// # Errors
///
/// Propagates any `ContentError` from the store. No partial list is
/// returned.
pub async fn list_blog_posts(
    query: &ListBlogPosts,
    store: &dyn ContentStore,
) -> Result<Vec<BlogPostProjection>, ContentError> {
    let entries = store.get_collection(BLOG_COLLECTION).await?;

    debug!(
        query_type = query.query_type(),
        correlation_id = %query.correlation_id(),
        entry_count = entries.len(),
        "projecting blog entries"
    );

    Ok(entries.into_iter().map(BlogPostProjection::from).collect())
}
