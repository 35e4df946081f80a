//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use blogdata_api::state::AppState;
use blogdata_content_store::FsContentStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build the full app router over a filesystem store rooted at `content_dir`.
/// Uses the same router and middleware as `main.rs`.
pub fn build_test_app(content_dir: &Path) -> Router {
    let content_store = Arc::new(FsContentStore::new(content_dir));
    blogdata_api::app(AppState::new(content_store))
}

/// Writes a blog post Markdown file under `content_dir/blog`.
pub fn write_post(content_dir: &Path, relative: &str, title: &str, description: &str) {
    write_file(
        content_dir,
        &format!("blog/{relative}"),
        &format!("---\ntitle: {title}\ndescription: {description}\n---\n\nPost body.\n"),
    );
}

/// Writes a file under `content_dir`, creating parent directories.
pub fn write_file(content_dir: &Path, relative: &str, contents: &str) {
    let path = content_dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Send a GET request and return status, headers and the raw body text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    (status, json)
}
