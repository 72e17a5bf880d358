//! Desktop platform
//!
//! File-backed durable storage, process-lifetime session storage and guide
//! documents read from the local filesystem.

use crate::config::PlayerConfig;
use crate::infrastructure::guides::FsGuideSource;
use crate::infrastructure::storage::{FileStorageProvider, MemoryStorageProvider};
use crate::state::Platform;

/// Create the desktop platform for `config`
pub fn create_platform(config: &PlayerConfig) -> Platform {
    tracing::debug!(
        guides = ?config.guides_dir,
        storage = ?config.storage_path,
        "Creating desktop platform"
    );
    Platform::new(
        FileStorageProvider::open(&config.storage_path),
        MemoryStorageProvider::new(),
        FsGuideSource::new(&config.guides_dir),
    )
}
