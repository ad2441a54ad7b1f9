//! File-backed store backend.
//!
//! All keys live in one JSON object file. The file is re-read on every
//! access, so edits made by another process (for example `qa-cli seed`)
//! show up on the next request, the way a page reload picks up local storage.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the file at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load every entry. A missing file is empty; a corrupt file is treated
    /// as empty so the next write replaces it.
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "corrupt store file, starting empty");
            BTreeMap::new()
        }))
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
                key: self.path.display().to_string(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write to a sibling file first so a crash never leaves half a store.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.load()?.into_keys().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get_item("qa_cart").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::new(&path);
        store.set_item("qa_theme", "light").unwrap();
        store.set_item("qa_cart", "[]").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get_item("qa_theme").unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(reopened.keys().unwrap(), vec!["qa_cart", "qa_theme"]);
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "garbage").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get_item("qa_theme").unwrap(), None);

        store.set_item("qa_theme", "dark").unwrap();
        assert_eq!(store.get_item("qa_theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_remove_item() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store.json"));
        store.set_item("qa_session", "{}").unwrap();
        store.remove_item("qa_session").unwrap();
        assert_eq!(store.get_item("qa_session").unwrap(), None);
    }
}
