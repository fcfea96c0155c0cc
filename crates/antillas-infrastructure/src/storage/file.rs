//! File-backed key-value storage.
//!
//! All keys live in one JSON object file, e.g.
//!
//! ```text
//! { "locationSelected": "true", "selectedLocation": "jamaica" }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use antillas_core::error::{AntillasError, Result};
use antillas_core::location::KeyValueStorage;

use super::atomic_json::AtomicJsonFile;
use crate::paths::AntillasPaths;

type Entries = BTreeMap<String, String>;

/// Key-value storage persisted to a JSON file.
///
/// Blocking file I/O runs on the blocking pool; updates within this process
/// are serialized by a mutex, updates across processes by a lock file.
#[derive(Clone)]
pub struct FileKeyValueStorage {
    file: Arc<Mutex<AtomicJsonFile<Entries>>>,
}

impl FileKeyValueStorage {
    /// Storage at the default preferences path.
    pub fn new(paths: &AntillasPaths) -> Result<Self> {
        Ok(Self::with_path(paths.preferences_file()?))
    }

    /// Storage at an explicit file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(Mutex::new(AtomicJsonFile::new(path))),
        }
    }

    async fn with_file<R, F>(&self, operation: &'static str, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&AtomicJsonFile<Entries>) -> Result<R> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || {
            let file = file.blocking_lock();
            f(&file).map_err(|e| AntillasError::storage(operation, e.to_string()))
        })
        .await
        .map_err(|e| AntillasError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.with_file("get", move |file| {
            Ok(file.load()?.and_then(|mut entries| entries.remove(&key)))
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, "Writing preference");
        let key = key.to_string();
        let value = value.to_string();
        self.with_file("set", move |file| {
            file.update(Entries::new(), |entries| {
                entries.insert(key, value);
            })
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        debug!(key, "Deleting preference");
        let key = key.to_string();
        self.with_file("delete", move |file| {
            file.update(Entries::new(), |entries| {
                entries.remove(&key);
            })
        })
        .await
    }
}
