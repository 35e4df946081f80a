//! Client-facing projection of blog entries.

use blogdata_core::store::ContentEntry;
use serde::Serialize;

/// Name of the collection holding blog posts.
pub const BLOG_COLLECTION: &str = "blog";

/// The reduced representation of a blog post served to clients.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostProjection {
    /// Post title, copied verbatim.
    pub title: String,
    /// Post description, copied verbatim.
    pub description: String,
    /// Site-relative URL of the post page.
    pub url: String,
}

impl From<ContentEntry> for BlogPostProjection {
    fn from(entry: ContentEntry) -> Self {
        let url = post_url(&entry.id);
        Self {
            title: entry.data.title,
            description: entry.data.description,
            url,
        }
    }
}

/// Returns the page URL for the blog post with the given id.
#[must_use]
pub fn post_url(id: &str) -> String {
    format!("/{BLOG_COLLECTION}/{id}/")
}
