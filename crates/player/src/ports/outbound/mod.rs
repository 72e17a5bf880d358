//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application code to load guides and persist characters without
//! depending on concrete implementations.

pub mod guide_source;
pub mod storage;

pub use guide_source::{GuideSource, GuideSourceError};
pub use storage::{storage_keys, StorageError, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use guide_source::MockGuideSource;
#[cfg(any(test, feature = "testing"))]
pub use storage::MockStorageProvider;
