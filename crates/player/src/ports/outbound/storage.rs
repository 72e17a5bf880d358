//! Key-value storage abstraction
//!
//! Character state talks to two independent stores through this one trait:
//! a durable store (survives restarts) and a session store (lives only as
//! long as the running client). Keeping them as separate instances lets tests
//! swap either scope for an in-memory fake.

use thiserror::Error;

/// Errors raised by storage adapters
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Persistent storage abstraction (file-based or in-memory)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns `Ok(None)` if not found
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove a value by key; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// These define the contract for what keys are used across the application.
pub mod storage_keys {
    /// Durable: JSON map of character name to character record
    pub const CHARACTERS: &str = "characters";
    /// Durable: name of the most recently active character
    pub const LAST_CHARACTER_NAME: &str = "lastCharacterName";
    /// Session scope: snapshot of the unsaved browsing session
    pub const SESSION_CHARACTER: &str = "sessionCharacter";
}
