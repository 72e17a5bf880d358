//! Levelguide domain: race/class vocabulary, guide documents, eligibility
//! rules and character progress records.
//!
//! Everything here is pure data and pure functions. Loading documents and
//! persisting characters happen in `levelguide-player`.

pub mod eligibility;
pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;

pub use eligibility::{
    filter_by_class, filter_by_race, is_eligible, should_show_for_class, should_show_for_race,
    ClassRestricted, RaceRestricted,
};
pub use entities::{Coords, ProcessedStep, QuestRef, Step, StepType, Tip, ZoneGuide};
pub use error::DomainError;
pub use types::{Faction, PlayerClass, PlayerRace};
pub use value_objects::{is_dungeon, CharacterRecord, SessionState};
