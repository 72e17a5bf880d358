//! Character State - who is playing, and where they are in their guide
//!
//! Owns the single live [`SessionState`] and all storage interaction:
//!
//! - durable `characters`: map of name to [`CharacterRecord`]
//! - durable `lastCharacterName`: the character to restore on startup
//! - session-scoped `sessionCharacter`: snapshot of an unsaved browsing session
//!
//! Every mutation persists synchronously before returning. Storage failures
//! are logged and never undo the in-memory change.
//!
//! Each change of who is playing (create, load, save, browse, delete, clear,
//! or a race/class/name edit) bumps a session revision. Moving the step index
//! does not. Guide state uses the revision to tell whether the position it
//! holds still belongs to the live session.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use levelguide_domain::{CharacterRecord, DomainError, PlayerClass, PlayerRace, SessionState};

use crate::ports::outbound::{storage_keys, StorageProvider};

type CharacterMap = BTreeMap<String, CharacterRecord>;

/// The parts of the live session guide state depends on, read under one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub race: Option<PlayerRace>,
    pub class: Option<PlayerClass>,
    pub current_step_index: usize,
    pub revision: u64,
}

/// Outcome of [`CharacterState::record_progress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressWrite {
    /// Stored as the live session's position
    Saved,
    /// Browsing session; the position stays with the caller
    Browsing,
    /// The live session is no longer the one the caller was tracking
    Stale,
}

pub struct CharacterState {
    durable: Arc<dyn StorageProvider>,
    session_store: Arc<dyn StorageProvider>,
    /// Held for the whole of each operation, which also serializes the
    /// read-modify-write of the character map.
    session: Mutex<SessionState>,
    /// Only modified while `session` is locked
    revision: AtomicU64,
}

impl CharacterState {
    /// Restore the live session from storage.
    ///
    /// First match wins: the last active character if its record still
    /// exists, then a browsing snapshot from the session scope, then an empty
    /// session.
    pub fn restore(
        durable: Arc<dyn StorageProvider>,
        session_store: Arc<dyn StorageProvider>,
    ) -> Self {
        let state = Self {
            durable,
            session_store,
            session: Mutex::new(SessionState::default()),
            revision: AtomicU64::new(0),
        };
        let initial = state.initial_session();
        *state.lock() = initial;
        state
    }

    fn initial_session(&self) -> SessionState {
        if let Some(name) = self.load_key(self.durable.as_ref(), storage_keys::LAST_CHARACTER_NAME) {
            if let Some(record) = self.read_characters().remove(&name) {
                tracing::info!(character = %name, "Restored last active character");
                return record.into();
            }
            tracing::debug!(character = %name, "Last active character no longer exists");
        }

        if let Some(raw) = self.load_key(self.session_store.as_ref(), storage_keys::SESSION_CHARACTER)
        {
            match serde_json::from_str::<SessionState>(&raw) {
                Ok(snapshot) => {
                    tracing::info!("Restored browsing session");
                    return SessionState {
                        char_name: None,
                        is_browsing_mode: true,
                        ..snapshot
                    };
                }
                Err(e) => tracing::warn!("Ignoring unreadable session snapshot: {}", e),
            }
        }

        SessionState::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Caller must hold the session lock
    fn bump_revision(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Snapshot of the live session
    pub fn session(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn race(&self) -> Option<PlayerRace> {
        self.lock().race
    }

    pub fn class(&self) -> Option<PlayerClass> {
        self.lock().class
    }

    pub fn char_name(&self) -> Option<String> {
        self.lock().char_name.clone()
    }

    pub fn current_step_index(&self) -> usize {
        self.lock().current_step_index
    }

    pub fn is_browsing_mode(&self) -> bool {
        self.lock().is_browsing_mode
    }

    pub fn view(&self) -> SessionView {
        let session = self.lock();
        SessionView {
            race: session.race,
            class: session.class,
            current_step_index: session.current_step_index,
            revision: self.revision.load(Ordering::SeqCst),
        }
    }

    /// Names of all saved characters, sorted
    pub fn character_names(&self) -> Vec<String> {
        let _guard = self.lock();
        self.read_characters().into_keys().collect()
    }

    // -------------------------------------------------------------------------
    // Character lifecycle
    // -------------------------------------------------------------------------

    /// Create (or silently replace) a character and make it the live session
    pub fn create_character(
        &self,
        name: &str,
        race: PlayerRace,
        class: PlayerClass,
    ) -> Result<(), DomainError> {
        let name = validate_name(name)?;
        let mut session = self.lock();

        let record = CharacterRecord::new(name, race, class);
        self.store_record(&record);
        self.forget_snapshot();
        *session = record.into();
        self.bump_revision();

        tracing::info!(character = %name, race = %race, class = %class, "Created character");
        Ok(())
    }

    /// Start an unsaved play-through; durable saves are left untouched
    pub fn start_browsing(&self, race: PlayerRace, class: PlayerClass) {
        let mut session = self.lock();
        *session = SessionState::browsing(race, class);
        self.bump_revision();
        self.persist(&session);
        tracing::info!(race = %race, class = %class, "Started browsing");
    }

    /// Promote the live session into a named save.
    ///
    /// Uses `index_override` as the saved position when given, otherwise the
    /// live session's index.
    pub fn save_character(
        &self,
        name: &str,
        index_override: Option<usize>,
    ) -> Result<(), DomainError> {
        let name = validate_name(name)?;
        let mut session = self.lock();

        let index = index_override.unwrap_or(session.current_step_index);
        let record = CharacterRecord::from_session(name, &session, index);
        self.store_record(&record);
        self.forget_snapshot();
        *session = record.into();
        self.bump_revision();

        tracing::info!(character = %name, index, "Saved character");
        Ok(())
    }

    /// Make a saved character the live session.
    ///
    /// Fails with [`DomainError::NotFound`] and changes nothing if no such
    /// character exists.
    pub fn load_character(&self, name: &str) -> Result<(), DomainError> {
        let mut session = self.lock();

        let Some(record) = self.read_characters().remove(name) else {
            tracing::warn!(character = %name, "Character not found");
            return Err(DomainError::not_found("Character", name));
        };

        self.save_key(
            self.durable.as_ref(),
            storage_keys::LAST_CHARACTER_NAME,
            name,
        );
        self.forget_snapshot();
        *session = record.into();
        self.bump_revision();

        tracing::info!(character = %name, "Loaded character");
        Ok(())
    }

    /// Delete a saved character.
    ///
    /// Deleting the live character also forgets the last active pointer and
    /// resets the session; picking a replacement is up to the caller.
    pub fn delete_character(&self, name: &str) {
        let mut session = self.lock();

        let mut characters = self.read_characters();
        characters.remove(name);
        self.write_characters(&characters);

        if session.char_name.as_deref() == Some(name) {
            self.remove_key(self.durable.as_ref(), storage_keys::LAST_CHARACTER_NAME);
            *session = SessionState::default();
            self.bump_revision();
        }

        tracing::info!(character = %name, "Deleted character");
    }

    /// Forget the active character and any browsing snapshot
    pub fn clear_character(&self) {
        let mut session = self.lock();
        self.remove_key(self.durable.as_ref(), storage_keys::LAST_CHARACTER_NAME);
        self.forget_snapshot();
        *session = SessionState::default();
        self.bump_revision();
        tracing::info!("Cleared active character");
    }

    // -------------------------------------------------------------------------
    // Field updates (each auto-persists)
    // -------------------------------------------------------------------------

    pub fn set_race(&self, race: PlayerRace) {
        self.update_identity(|s| s.race = Some(race));
    }

    pub fn set_class(&self, class: PlayerClass) {
        self.update_identity(|s| s.class = Some(class));
    }

    pub fn set_char_name(&self, name: &str) {
        self.update_identity(|s| s.char_name = Some(name.to_string()));
    }

    pub fn set_current_step_index(&self, index: usize) {
        self.update(|s| s.current_step_index = index);
    }

    /// Store a guide position reached by navigation.
    ///
    /// Writes only if the session is still at `expected_revision` and is not
    /// browsing. Both checks and the write happen under one lock.
    pub fn record_progress(&self, expected_revision: u64, index: usize) -> ProgressWrite {
        let mut session = self.lock();
        if self.revision.load(Ordering::SeqCst) != expected_revision {
            return ProgressWrite::Stale;
        }
        if session.is_browsing_mode {
            return ProgressWrite::Browsing;
        }
        session.current_step_index = index;
        self.persist(&session);
        ProgressWrite::Saved
    }

    fn update(&self, change: impl FnOnce(&mut SessionState)) {
        let mut session = self.lock();
        change(&mut session);
        self.persist(&session);
    }

    fn update_identity(&self, change: impl FnOnce(&mut SessionState)) {
        let mut session = self.lock();
        change(&mut session);
        self.bump_revision();
        self.persist(&session);
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Write the live session to whichever scope it belongs to
    fn persist(&self, session: &SessionState) {
        if !session.is_browsing_mode {
            if let Some(name) = session.char_name.as_deref() {
                let record =
                    CharacterRecord::from_session(name, session, session.current_step_index);
                self.store_record(&record);
            }
        } else if session.has_selection() {
            match serde_json::to_string(session) {
                Ok(raw) => self.save_key(
                    self.session_store.as_ref(),
                    storage_keys::SESSION_CHARACTER,
                    &raw,
                ),
                Err(e) => tracing::error!("Failed to serialize session snapshot: {}", e),
            }
        }
    }

    /// Insert/replace a record and mark it as last active
    fn store_record(&self, record: &CharacterRecord) {
        let mut characters = self.read_characters();
        characters.insert(record.name.clone(), record.clone());
        self.write_characters(&characters);
        self.save_key(
            self.durable.as_ref(),
            storage_keys::LAST_CHARACTER_NAME,
            &record.name,
        );
    }

    fn forget_snapshot(&self) {
        self.remove_key(self.session_store.as_ref(), storage_keys::SESSION_CHARACTER);
    }

    fn read_characters(&self) -> CharacterMap {
        let Some(raw) = self.load_key(self.durable.as_ref(), storage_keys::CHARACTERS) else {
            return CharacterMap::new();
        };
        match serde_json::from_str::<CharacterMap>(&raw) {
            Ok(mut characters) => {
                for (name, record) in characters.iter_mut() {
                    record.name.clone_from(name);
                    record.is_browsing_mode = false;
                }
                characters
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable character map: {}", e);
                CharacterMap::new()
            }
        }
    }

    fn write_characters(&self, characters: &CharacterMap) {
        match serde_json::to_string(characters) {
            Ok(raw) => self.save_key(self.durable.as_ref(), storage_keys::CHARACTERS, &raw),
            Err(e) => tracing::error!("Failed to serialize character map: {}", e),
        }
    }

    fn load_key(&self, store: &dyn StorageProvider, key: &str) -> Option<String> {
        store.load(key).unwrap_or_else(|e| {
            tracing::error!(key, "Failed to read from storage: {}", e);
            None
        })
    }

    fn save_key(&self, store: &dyn StorageProvider, key: &str, value: &str) {
        if let Err(e) = store.save(key, value) {
            tracing::error!(key, "Failed to write to storage: {}", e);
        }
    }

    fn remove_key(&self, store: &dyn StorageProvider, key: &str) {
        if let Err(e) = store.remove(key) {
            tracing::error!(key, "Failed to remove from storage: {}", e);
        }
    }
}

fn validate_name(name: &str) -> Result<&str, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("Character name cannot be empty"));
    }
    Ok(name)
}
