//! Flat-file persistence for the registry
//!
//! The whole tree lives in one JSON document mapping each name to its
//! person record. Every command re-reads the file, edits in memory, and
//! overwrites the whole file. There is no locking and no partial-write
//! recovery; concurrent invocations are last-writer-wins.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::Registry;

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "family_tree.json";

/// Handle to the persisted family tree file.
pub struct TreeStore {
    path: PathBuf,
}

impl TreeStore {
    /// Open the store at `path`, creating an empty tree if the file is
    /// absent.
    ///
    /// An existing file is never overwritten here, even if its content is
    /// unreadable; parse failures surface from [`load`](Self::load)
    /// instead. The freshly created file holds the compact literal `{}`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            fs::write(path, "{}").with_context(|| {
                format!("Failed to create family tree file: {}", path.display())
            })?;
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole tree
    pub fn load(&self) -> Result<Registry> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read family tree file: {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to decode family tree data: {}", self.path.display()))
    }

    /// Overwrite the whole tree, pretty-printed with two-space indentation
    pub fn save(&self, registry: &Registry) -> Result<()> {
        let content =
            serde_json::to_string_pretty(registry).context("Failed to encode family tree data")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write family tree file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::SON;
    use tempfile::TempDir;

    fn temp_store() -> (TreeStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = TreeStore::open(&dir.path().join(DEFAULT_STORE_FILE)).unwrap();
        (store, dir)
    }

    #[test]
    fn test_open_creates_compact_empty_tree() {
        let (store, _dir) = temp_store();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{}");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_open_never_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        fs::write(&path, "not json at all").unwrap();

        let store = TreeStore::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");

        // The malformed content is only rejected once it is actually read.
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let (store, _dir) = temp_store();

        let mut registry = store.load().unwrap();
        registry.add_person("Alice");
        registry.add_relation("Alice", SON).unwrap();
        store.save(&registry).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n  \"Alice\""));
        assert!(content.contains("\"name\": \"Alice\""));
        assert!(content.contains("\"relations\": [\n      \"son\"\n    ]"));
    }

    #[test]
    fn test_round_trip_preserves_entries_and_tag_order() {
        let (store, _dir) = temp_store();

        let mut registry = store.load().unwrap();
        registry.add_person("Kk");
        registry.add_person("Amit");
        registry.connect("Amit", SON, "Kk").unwrap();
        registry.add_relation("Amit", "daughter").unwrap();
        store.save(&registry).unwrap();

        // A fresh handle plays the role of the next process invocation.
        let reopened = TreeStore::open(store.path()).unwrap();
        assert_eq!(reopened.load().unwrap(), registry);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        let store = TreeStore::open(&path).unwrap();

        fs::remove_file(&path).unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Failed to read family tree file"));
    }

    #[test]
    fn test_load_reports_malformed_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        fs::write(&path, r#"{"Alice": {"name": "Alice"}}"#).unwrap();

        let store = TreeStore::open(&path).unwrap();
        let err = store.load().unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to decode family tree data"));
    }
}
