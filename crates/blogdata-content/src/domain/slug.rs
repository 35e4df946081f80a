//! Entry id derivation from file paths.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

/// Everything a slug drops: anything that is not a letter, mark, number,
/// connector punctuation, `-` or a plain space.
static STRIPPED_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} -]").unwrap());

/// Slugifies a single path segment, GitHub heading-anchor style.
///
/// The segment is lowercased, every character outside letters, marks,
/// numbers, `_`, `-` and space is removed, and each space becomes `-`.
/// Runs are not collapsed: `C++ & Rust` becomes `c--rust`.
#[must_use]
pub fn slugify(segment: &str) -> String {
    STRIPPED_CHARS_RE
        .replace_all(&segment.to_lowercase(), "")
        .replace(' ', "-")
}

/// Derives an entry id from a path relative to its collection directory.
///
/// The extension is stripped and each segment slugified, joined with `/`.
/// A final `index` segment is dropped when it has a parent, so
/// `2024/index.md` is `2024`. Returns `None` if any segment slugifies to
/// nothing or the path is not a plain relative path.
#[must_use]
pub fn entry_id_from_path(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?;
    let parent = relative.parent().unwrap_or_else(|| Path::new(""));

    let mut segments = Vec::new();
    for component in parent.components() {
        match component {
            Component::Normal(part) => segments.push(slugify(&part.to_string_lossy())),
            Component::CurDir => {}
            _ => return None,
        }
    }
    let last = slugify(&stem.to_string_lossy());
    if last != "index" || segments.is_empty() {
        segments.push(last);
    }

    if segments.iter().any(String::is_empty) {
        return None;
    }

    Some(segments.join("/"))
}
