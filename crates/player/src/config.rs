//! Player configuration
//!
//! Read from the environment (after `.env` files are loaded by the binary);
//! command-line flags override individual values.

use std::path::PathBuf;

use crate::infrastructure::storage::FileStorageProvider;

pub const GUIDES_DIR_VAR: &str = "LEVELGUIDE_GUIDES_DIR";
pub const STORAGE_PATH_VAR: &str = "LEVELGUIDE_STORAGE_PATH";

const DEFAULT_GUIDES_DIR: &str = "guides";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Root of the guide documents (`<root>/<faction>/<name>.json`)
    pub guides_dir: PathBuf,
    /// Durable storage file
    pub storage_path: PathBuf,
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            guides_dir: var(GUIDES_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GUIDES_DIR)),
            storage_path: var(STORAGE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(FileStorageProvider::default_path),
        }
    }

    pub fn with_guides_dir(mut self, guides_dir: impl Into<PathBuf>) -> Self {
        self.guides_dir = guides_dir.into();
        self
    }

    pub fn with_storage_path(mut self, storage_path: impl Into<PathBuf>) -> Self {
        self.storage_path = storage_path.into();
        self
    }
}
