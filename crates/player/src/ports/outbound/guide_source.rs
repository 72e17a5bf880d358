//! Guide Source Port - loads zone guide documents by name
//!
//! Documents live under a two-level namespace `faction/name`. The faction is
//! derived from the player's race before fetching.
//!
//! Note: uses `async_trait` instead of returning `Pin<Box<dyn Future>>` for
//! better mockall compatibility.

use async_trait::async_trait;
use thiserror::Error;

use levelguide_domain::{Faction, ZoneGuide};

/// Errors raised while fetching a single guide document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuideSourceError {
    #[error("Guide document not found: {name}")]
    NotFound { name: String },

    #[error("Guide document {name} is malformed: {message}")]
    Malformed { name: String, message: String },

    #[error("Guide document {name} could not be read: {message}")]
    Io { name: String, message: String },
}

/// Port for fetching zone guide documents
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GuideSource: Send + Sync {
    /// Fetch the document `name` from the `faction` namespace
    async fn fetch_guide(&self, faction: Faction, name: &str)
        -> Result<ZoneGuide, GuideSourceError>;
}
