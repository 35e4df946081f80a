//! YAML frontmatter extraction from Markdown sources.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Deserialize;
use thiserror::Error;

/// The frontmatter keys this service reads. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Entry title.
    pub title: String,
    /// Short summary of the entry.
    pub description: String,
    /// Explicit id, overriding the one derived from the file path.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Errors raised while reading frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The source does not start with a YAML metadata block.
    #[error("no YAML frontmatter block found")]
    Missing,

    /// The metadata block is not valid YAML or lacks a required key.
    #[error("invalid frontmatter: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Returns the raw text of the leading YAML metadata block, if any.
///
/// A leading byte order mark is ignored.
#[must_use]
pub fn extract_block(source: &str) -> Option<String> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut block = String::new();
    let mut in_block = false;
    let mut found = false;

    for event in Parser::new_ext(source, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS) {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => {
                in_block = true;
                found = true;
            }
            Event::End(TagEnd::MetadataBlock(_)) => break,
            Event::Text(text) if in_block => block.push_str(&text),
            _ if !in_block => break,
            _ => {}
        }
    }

    found.then_some(block)
}

/// Parses the frontmatter of a Markdown source.
///
/// # Errors
///
/// Returns `FrontmatterError::Missing` if there is no metadata block, and
/// `FrontmatterError::Invalid` if the block fails to deserialize.
pub fn parse(source: &str) -> Result<Frontmatter, FrontmatterError> {
    let block = extract_block(source).ok_or(FrontmatterError::Missing)?;
    Ok(serde_yaml::from_str(&block)?)
}
