//! Shared test mocks and utilities for the blog data service.

mod store;

pub use store::{FailingContentStore, InMemoryContentStore};
