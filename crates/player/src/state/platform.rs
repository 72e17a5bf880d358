//! Platform DI Container
//!
//! Aggregates the adapters behind the outbound ports so the state objects can
//! be built without knowing which storage or guide source is in use.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs
//! - Tests build one directly from in-memory fakes

use std::sync::Arc;

use crate::ports::outbound::{GuideSource, StorageProvider};

use super::{CharacterState, GuideState};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    /// Survives restarts (saved characters, last active pointer)
    durable_storage: Arc<dyn StorageProvider>,
    /// Lives as long as the running client (browsing snapshot)
    session_storage: Arc<dyn StorageProvider>,
    guides: Arc<dyn GuideSource>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<D, S, G>(durable_storage: D, session_storage: S, guides: G) -> Self
    where
        D: StorageProvider + 'static,
        S: StorageProvider + 'static,
        G: GuideSource + 'static,
    {
        Self {
            durable_storage: Arc::new(durable_storage),
            session_storage: Arc::new(session_storage),
            guides: Arc::new(guides),
        }
    }

    pub fn durable_storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.durable_storage)
    }

    pub fn session_storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.session_storage)
    }

    pub fn guides(&self) -> Arc<dyn GuideSource> {
        Arc::clone(&self.guides)
    }

    /// Restore the character state from this platform's storage
    pub fn character_state(&self) -> Arc<CharacterState> {
        Arc::new(CharacterState::restore(
            self.durable_storage(),
            self.session_storage(),
        ))
    }

    /// Guide state bound to `character` and this platform's guide source
    pub fn guide_state(&self, character: Arc<CharacterState>) -> GuideState {
        GuideState::new(character, self.guides())
    }
}
