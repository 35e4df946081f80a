//! Application layer: query handlers.

pub mod query_handlers;
