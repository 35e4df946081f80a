//! Filesystem implementation of the `ContentStore` trait.
//!
//! A collection is a directory under the store root. Every Markdown file
//! below it (recursively) is one entry, described by its YAML frontmatter.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use blogdata_content::domain::entry::{is_entry_path, parse_entry};
use blogdata_core::error::ContentError;
use blogdata_core::store::{ContentEntry, ContentStore};

/// Markdown-on-disk content store.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Creates a store reading collections from subdirectories of `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn get_collection(&self, name: &str) -> Result<Vec<ContentEntry>, ContentError> {
        if !is_plain_name(name) {
            return Err(ContentError::unavailable(name, "invalid collection name"));
        }

        let collection = name.to_owned();
        let dir = self.root.join(name);
        let entries = tokio::task::spawn_blocking(move || load_collection(&collection, &dir))
            .await
            .map_err(|e| ContentError::unavailable(name, format!("loader task failed: {e}")))??;

        debug!(entry_count = entries.len(), "loaded collection");
        Ok(entries)
    }
}

/// Collection names are single path segments.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

/// Reads every entry under `dir`, sorted by id.
fn load_collection(collection: &str, dir: &Path) -> Result<Vec<ContentEntry>, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::unavailable(
            collection,
            format!("{} is not a directory", dir.display()),
        ));
    }

    let pattern = format!("{}/**/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob(&pattern)
        .map_err(|e| ContentError::unavailable(collection, format!("bad glob pattern: {e}")))?;

    let mut by_id: BTreeMap<String, (PathBuf, ContentEntry)> = BTreeMap::new();

    for path in paths {
        let path = path.map_err(|e| ContentError::unavailable(collection, e.to_string()))?;
        let Ok(relative) = path.strip_prefix(dir) else {
            continue;
        };
        if !path.is_file() || !is_entry_path(relative) {
            continue;
        }

        let source =
            std::fs::read_to_string(&path).map_err(|e| read_error(collection, relative, &e))?;
        let entry = parse_entry(relative, &source)?;

        if let Some((existing, _)) = by_id.get(&entry.id) {
            return Err(ContentError::malformed(
                relative.display().to_string(),
                format!(
                    "duplicate id '{}' (also used by {})",
                    entry.id,
                    existing.display()
                ),
            ));
        }
        by_id.insert(entry.id.clone(), (relative.to_path_buf(), entry));
    }

    Ok(by_id.into_values().map(|(_, entry)| entry).collect())
}

fn read_error(collection: &str, relative: &Path, err: &io::Error) -> ContentError {
    if err.kind() == io::ErrorKind::InvalidData {
        ContentError::malformed(relative.display().to_string(), "file is not valid UTF-8")
    } else {
        ContentError::unavailable(
            collection,
            format!("failed to read {}: {err}", relative.display()),
        )
    }
}
