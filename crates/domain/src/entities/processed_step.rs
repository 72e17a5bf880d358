//! ProcessedStep entity - a step placed in the flattened guide sequence

use serde::{Deserialize, Serialize};

use super::{Step, ZoneGuide};
use crate::types::Faction;

/// A step after chain resolution.
///
/// Its tips are already filtered to the player's class, and `global_index`
/// is its position in the whole resolved chain (0, 1, 2, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedStep {
    #[serde(flatten)]
    pub step: Step,
    /// "11-13_loch_modan_dwarf_gnome:lochmodan_001"
    pub composite_id: String,
    /// Name of the owning guide document
    pub zone_name: String,
    /// Step id as authored in its document
    pub original_id: String,
    pub global_index: usize,
    pub level_range: String,
    pub faction: Faction,
}

impl ProcessedStep {
    /// Stamp `step` with its identity inside `guide` and its chain position
    pub fn stamp(step: Step, guide: &ZoneGuide, global_index: usize) -> Self {
        Self {
            composite_id: format!("{}:{}", guide.name, step.id),
            zone_name: guide.name.clone(),
            original_id: step.id.clone(),
            global_index,
            level_range: guide.level_range.clone(),
            faction: guide.faction,
            step,
        }
    }

    pub fn description(&self) -> &str {
        &self.step.description
    }
}
