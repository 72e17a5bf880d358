//! State containers for the guide session
//!
//! [`CharacterState`] is the source of truth for who is playing and owns all
//! storage access. [`GuideState`] derives the resolved guide from it. The
//! [`Platform`] container wires both to concrete adapters.

mod character_state;
mod guide_state;
mod platform;

pub use character_state::{CharacterState, ProgressWrite, SessionView};
pub use guide_state::{GuideSnapshot, GuideState, GuideStatus};
pub use platform::Platform;
