//! # Levelguide Domain Types
//!
//! Closed vocabulary shared by guide content and saved characters: races,
//! classes and factions.
//!
//! These are pure data types with no I/O. They serialize by canonical name so
//! the same tokens appear in guide JSON restriction lists and in storage blobs.

mod race;
pub use race::{Faction, PlayerRace};

mod class;
pub use class::PlayerClass;
