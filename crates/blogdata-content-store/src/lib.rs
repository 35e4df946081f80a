//! Blog Data — content store adapters.
//!
//! Implements the `ContentStore` port over Markdown files on disk.

pub mod fs_content_store;

pub use fs_content_store::FsContentStore;
