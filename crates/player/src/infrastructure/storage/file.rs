//! File-backed durable storage

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::ports::outbound::{StorageError, StorageProvider};

const FALLBACK_FILE: &str = "levelguide_storage.json";

/// Durable storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/levelguide/storage.json
/// - macOS: ~/Library/Application Support/io.levelguide.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\levelguide\player\config\storage.json
#[derive(Clone)]
pub struct FileStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorageProvider {
    /// Platform-specific default location of the storage file
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("io", "levelguide", "player")
            .map(|dirs| dirs.config_dir().join("storage.json"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_FILE))
    }

    /// Open the storage file at `storage_path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten on the next save.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = Self::read_file(&storage_path);

        tracing::debug!("File storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn read_file(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Failed to parse storage file: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read storage file: {}", e);
                HashMap::new()
            }
        }
    }

    /// Persist the cache to disk.
    ///
    /// Writes a sibling temp file and renames it over the target so a crash
    /// mid-write never leaves a truncated store behind.
    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(cache)?;
        let tmp_path = self.storage_path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.storage_path)?;
        Ok(())
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        self.persist(&guard)
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .cache
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        if guard.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&guard)
    }
}
