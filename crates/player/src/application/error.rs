//! Guide resolution error types
//!
//! Every variant is fatal to the resolution call that raised it and is never
//! retried here. Unsupported races are reported distinctly from document
//! failures, which all collapse to one generic user-facing message.

use thiserror::Error;

use levelguide_domain::PlayerRace;

use crate::ports::outbound::GuideSourceError;

const GENERIC_LOAD_FAILURE: &str = "Failed to load guide";

/// Errors that can occur while resolving a guide chain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Race has no starting guide document
    #[error("{0} is not supported yet")]
    UnsupportedRace(PlayerRace),

    #[error("Guide document not found: {name}")]
    DocumentNotFound { name: String },

    #[error("Guide document {name} is malformed: {message}")]
    MalformedDocument { name: String, message: String },

    #[error("Guide document {name} is unavailable: {message}")]
    Unavailable { name: String, message: String },

    /// A `next` pointer leads back to an already loaded document
    #[error("Guide chain loops back to {name}")]
    ChainCycle { name: String },
}

impl GuideError {
    /// Message suitable for showing to the player
    pub fn user_message(&self) -> String {
        match self {
            GuideError::UnsupportedRace(race) => {
                format!("{} guides are not supported yet", race.display_name())
            }
            _ => GENERIC_LOAD_FAILURE.to_string(),
        }
    }

    pub fn is_unsupported_race(&self) -> bool {
        matches!(self, GuideError::UnsupportedRace(_))
    }
}

impl From<GuideSourceError> for GuideError {
    fn from(e: GuideSourceError) -> Self {
        match e {
            GuideSourceError::NotFound { name } => GuideError::DocumentNotFound { name },
            GuideSourceError::Malformed { name, message } => {
                GuideError::MalformedDocument { name, message }
            }
            GuideSourceError::Io { name, message } => GuideError::Unavailable { name, message },
        }
    }
}
