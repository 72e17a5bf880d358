//! ZoneGuide entity - one document in a chain of leveling guides

use serde::{Deserialize, Serialize};

use super::Step;
use crate::types::Faction;

/// A single zone guide document.
///
/// Documents link to their successor through `next`; a document with no
/// `next` ends the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneGuide {
    /// Display label of the primary zone (e.g. "Elwynn Forest")
    pub zone: String,
    /// e.g. "6-11"
    pub level_range: String,
    pub faction: Faction,
    /// Document name; matches the name it is stored under
    pub name: String,
    #[serde(default)]
    pub next: Option<String>,
    pub steps: Vec<Step>,
}

impl ZoneGuide {
    pub fn new(
        name: impl Into<String>,
        zone: impl Into<String>,
        level_range: impl Into<String>,
        faction: Faction,
    ) -> Self {
        Self {
            zone: zone.into(),
            level_range: level_range.into(),
            faction,
            name: name.into(),
            next: None,
            steps: Vec::new(),
        }
    }

    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}
