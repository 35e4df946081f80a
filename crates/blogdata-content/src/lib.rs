//! Blog Data — content context.
//!
//! Responsible for turning Markdown entries into validated content entries
//! and projecting blog entries into the client-facing list format.

pub mod application;
pub mod domain;
