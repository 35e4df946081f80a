//! Markdown source to `ContentEntry` conversion.

use std::path::Path;

use blogdata_core::error::ContentError;
use blogdata_core::store::{ContentEntry, EntryData};

use crate::domain::{frontmatter, slug};

/// File extensions treated as content entries.
pub const ENTRY_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

/// Returns `true` if a path relative to a collection directory names an
/// entry file.
///
/// Only Markdown extensions count, and any segment starting with `_` or `.`
/// hides the file.
#[must_use]
pub fn is_entry_path(relative: &Path) -> bool {
    let has_entry_extension = relative
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ENTRY_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        });

    has_entry_extension
        && relative.components().all(|component| {
            let name = component.as_os_str().to_string_lossy();
            !(name.starts_with('_') || name.starts_with('.'))
        })
}

/// Builds a validated entry from a Markdown source.
///
/// # Errors
///
/// Returns `ContentError::MalformedEntry`, labelled with `relative`, if the
/// frontmatter is missing or invalid, or no id can be derived from the path.
pub fn parse_entry(relative: &Path, source: &str) -> Result<ContentEntry, ContentError> {
    let label = relative.display().to_string();
    let frontmatter =
        frontmatter::parse(source).map_err(|e| ContentError::malformed(&label, e.to_string()))?;

    let id = match frontmatter.slug {
        Some(explicit) if !explicit.trim().is_empty() => explicit,
        Some(_) => return Err(ContentError::malformed(label, "slug must not be empty")),
        None => slug::entry_id_from_path(relative).ok_or_else(|| {
            ContentError::malformed(&label, "cannot derive an id from the file path")
        })?,
    };

    Ok(ContentEntry {
        id,
        data: EntryData {
            title: frontmatter.title,
            description: frontmatter.description,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_entry_path_accepts_markdown_extensions() {
        assert!(is_entry_path(Path::new("post.md")));
        assert!(is_entry_path(Path::new("post.markdown")));
        assert!(is_entry_path(Path::new("nested/post.mdx")));
        assert!(is_entry_path(Path::new("LOUD.MD")));
    }

    #[test]
    fn test_is_entry_path_rejects_other_files() {
        assert!(!is_entry_path(Path::new("image.png")));
        assert!(!is_entry_path(Path::new("README")));
    }

    #[test]
    fn test_is_entry_path_rejects_hidden_and_underscored() {
        assert!(!is_entry_path(Path::new("_draft.md")));
        assert!(!is_entry_path(Path::new(".hidden.md")));
        assert!(!is_entry_path(Path::new("_partials/intro.md")));
    }

    #[test]
    fn test_parse_entry_derives_id_from_path() {
        // Arrange
        let source = "---\ntitle: Hello World\ndescription: First post\n---\n";

        // Act
        let entry = parse_entry(Path::new("Hello World.md"), source).unwrap();

        // Assert
        assert_eq!(entry, ContentEntry::new("hello-world", "Hello World", "First post"));
    }

    #[test]
    fn test_parse_entry_prefers_slug_override() {
        let source = "---\ntitle: T\ndescription: D\nslug: my-own-id\n---\n";

        let entry = parse_entry(Path::new("whatever.md"), source).unwrap();

        assert_eq!(entry.id, "my-own-id");
    }

    #[test]
    fn test_parse_entry_rejects_blank_slug() {
        let source = "---\ntitle: T\ndescription: D\nslug: \"  \"\n---\n";

        let result = parse_entry(Path::new("post.md"), source);

        assert!(matches!(result, Err(ContentError::MalformedEntry { .. })));
    }

    #[test]
    fn test_parse_entry_labels_errors_with_path() {
        let result = parse_entry(Path::new("broken.md"), "no frontmatter");

        match result {
            Err(ContentError::MalformedEntry { entry, reason }) => {
                assert_eq!(entry, "broken.md");
                assert_eq!(reason, "no YAML frontmatter block found");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }
}
