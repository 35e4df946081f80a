//! Blog post list endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};
use uuid::Uuid;

use blogdata_content::application::query_handlers;
use blogdata_content::domain::projection::BlogPostProjection;
use blogdata_content::domain::queries;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /blog-data.json
#[instrument(skip(state))]
async fn blog_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPostProjection>>, ApiError> {
    let query = queries::ListBlogPosts {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %query.correlation_id, "handling list_blog_posts query");

    let posts = query_handlers::list_blog_posts(&query, &*state.content_store).await?;

    info!(
        correlation_id = %query.correlation_id,
        post_count = posts.len(),
        "listed blog posts"
    );

    Ok(Json(posts))
}

/// Returns the router for the blog post list.
pub fn router() -> Router<AppState> {
    Router::new().route("/blog-data.json", get(blog_data))
}
