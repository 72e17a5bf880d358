//! Value objects - immutable data without identity

mod character;
mod zones;

pub use character::{CharacterRecord, SessionState};
pub use zones::is_dungeon;
