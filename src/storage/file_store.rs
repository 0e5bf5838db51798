use log::{trace, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

const PROGRESS_FILE: &str = "progress.json";

/// Key-value store backed by a single JSON object on disk.
///
/// The whole file is rewritten on every mutation; the data set is a handful of keys.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self { path, entries }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(PROGRESS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(target: "storage", "Ignoring unreadable {}: {}", path.display(), err);
                BTreeMap::new()
            }
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        trace!(target: "storage", "Wrote {} keys to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
