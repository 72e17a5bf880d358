//! Character progress value objects
//!
//! `SessionState` is the live "who is playing" state; `CharacterRecord` is a
//! named save of it. Both share one storage shape:
//!
//! ```json
//! {"playerRace": "Human", "playerClass": "Mage", "charName": "Foo",
//!  "currentStepIndex": 3, "isBrowsingMode": false}
//! ```
//!
//! Reading is lenient: stored blobs may predate a vocabulary change or have
//! been edited by hand, so an unknown race/class reads as unset and a missing,
//! negative or non-numeric index reads as 0.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{PlayerClass, PlayerRace};

/// Live session state. Exactly one exists per running client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(rename = "playerRace", default, deserialize_with = "lenient")]
    pub race: Option<PlayerRace>,
    #[serde(rename = "playerClass", default, deserialize_with = "lenient")]
    pub class: Option<PlayerClass>,
    /// `None` while browsing
    #[serde(default)]
    pub char_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_index")]
    pub current_step_index: usize,
    #[serde(default)]
    pub is_browsing_mode: bool,
}

impl SessionState {
    /// Unsaved play-through starting at the first step
    pub fn browsing(race: PlayerRace, class: PlayerClass) -> Self {
        Self {
            race: Some(race),
            class: Some(class),
            char_name: None,
            current_step_index: 0,
            is_browsing_mode: true,
        }
    }

    /// Whether there is anything worth keeping in the session snapshot
    pub fn has_selection(&self) -> bool {
        self.race.is_some() || self.class.is_some()
    }
}

impl From<CharacterRecord> for SessionState {
    fn from(record: CharacterRecord) -> Self {
        Self {
            race: record.race,
            class: record.class,
            char_name: Some(record.name),
            current_step_index: record.current_step_index,
            is_browsing_mode: false,
        }
    }
}

/// A named, durable character save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    #[serde(rename = "charName", default)]
    pub name: String,
    #[serde(rename = "playerRace", default, deserialize_with = "lenient")]
    pub race: Option<PlayerRace>,
    #[serde(rename = "playerClass", default, deserialize_with = "lenient")]
    pub class: Option<PlayerClass>,
    #[serde(default, deserialize_with = "lenient_index")]
    pub current_step_index: usize,
    /// Always false once stored
    #[serde(default)]
    pub is_browsing_mode: bool,
}

impl CharacterRecord {
    /// Fresh character at the start of its guide
    pub fn new(name: impl Into<String>, race: PlayerRace, class: PlayerClass) -> Self {
        Self {
            name: name.into(),
            race: Some(race),
            class: Some(class),
            current_step_index: 0,
            is_browsing_mode: false,
        }
    }

    /// Promote a session into a named save at `current_step_index`
    pub fn from_session(
        name: impl Into<String>,
        session: &SessionState,
        current_step_index: usize,
    ) -> Self {
        Self {
            name: name.into(),
            race: session.race,
            class: session.class,
            current_step_index,
            is_browsing_mode: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Known(T),
    Other(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Known(value) => Some(value),
        Lenient::Other(_) => None,
    })
}

fn lenient_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, usize>(deserializer)?.unwrap_or(0))
}
