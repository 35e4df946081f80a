//! Domain layer: entry parsing, identity and projections.

pub mod entry;
pub mod frontmatter;
pub mod projection;
pub mod queries;
pub mod slug;
