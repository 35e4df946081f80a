//! Blog Data Core — shared content abstractions.
//!
//! This crate defines the content store port, the entry shape every store
//! must validate into, and the error type shared by all layers. It contains
//! no infrastructure code.

pub mod error;
pub mod query;
pub mod store;
