//! Step entity - one instruction inside a zone guide document
//!
//! Steps are deserialized straight from guide JSON. Every optional field
//! accepts either `null` or absence.

use serde::{Deserialize, Serialize};

use crate::eligibility::{ClassRestricted, RaceRestricted};
use crate::value_objects::is_dungeon;

/// What the player is asked to do in a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    QuestAccept,
    QuestTurnin,
    Kill,
    Loot,
    Travel,
    Grind,
    Fly,
    Info,
}

impl StepType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::QuestAccept => "quest_accept",
            StepType::QuestTurnin => "quest_turnin",
            StepType::Kill => "kill",
            StepType::Loot => "loot",
            StepType::Travel => "travel",
            StepType::Grind => "grind",
            StepType::Fly => "fly",
            StepType::Info => "info",
        }
    }
}

/// Map position on the 0-100 zone map scale, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }
}

/// Quest referenced by a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRef {
    pub id: u32,
    pub name: String,
}

/// Extra guidance attached to a step, optionally limited to one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tip {
    Warning {
        #[serde(default)]
        class: Option<String>,
        text: String,
    },
    #[serde(rename = "tip")]
    Hint {
        #[serde(default)]
        class: Option<String>,
        text: String,
    },
    Info {
        #[serde(default)]
        class: Option<String>,
        text: String,
    },
    Link {
        #[serde(default)]
        class: Option<String>,
        text: String,
        url: String,
    },
}

impl Tip {
    pub fn text(&self) -> &str {
        match self {
            Tip::Warning { text, .. }
            | Tip::Hint { text, .. }
            | Tip::Info { text, .. }
            | Tip::Link { text, .. } => text,
        }
    }

    /// Single-class restriction, if any
    pub fn class(&self) -> Option<&str> {
        match self {
            Tip::Warning { class, .. }
            | Tip::Hint { class, .. }
            | Tip::Info { class, .. }
            | Tip::Link { class, .. } => class.as_deref(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Tip::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// A raw step as authored in a guide document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique within its document (e.g. "northshire_001")
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub description: String,
    #[serde(default)]
    pub classes: Option<Vec<String>>,
    #[serde(default)]
    pub races: Option<Vec<String>>,
    #[serde(default)]
    pub coords: Option<Coords>,
    /// Map zone key where the step happens (lowercase, underscores)
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub tips: Option<Vec<Tip>>,
    #[serde(default)]
    pub quests: Option<Vec<QuestRef>>,
    #[serde(default)]
    pub npc: Option<String>,
    #[serde(default)]
    pub mobs: Option<Vec<String>>,
}

impl Step {
    pub fn new(id: impl Into<String>, step_type: StepType, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step_type,
            description: description.into(),
            classes: None,
            races: None,
            coords: None,
            zone: None,
            tips: None,
            quests: None,
            npc: None,
            mobs: None,
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_races<I, S>(mut self, races: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.races = Some(races.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_coords(mut self, x: f64, y: f64, zone: impl Into<String>) -> Self {
        self.coords = Some(Coords(x, y));
        self.zone = Some(zone.into());
        self
    }

    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tips.get_or_insert_with(Vec::new).push(tip);
        self
    }

    pub fn with_quest(mut self, id: u32, name: impl Into<String>) -> Self {
        self.quests.get_or_insert_with(Vec::new).push(QuestRef {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_npc(mut self, npc: impl Into<String>) -> Self {
        self.npc = Some(npc.into());
        self
    }

    pub fn tips(&self) -> &[Tip] {
        self.tips.as_deref().unwrap_or_default()
    }

    pub fn quests(&self) -> &[QuestRef] {
        self.quests.as_deref().unwrap_or_default()
    }

    pub fn mobs(&self) -> &[String] {
        self.mobs.as_deref().unwrap_or_default()
    }

    /// Whether this step takes place inside a dungeon instance
    pub fn is_dungeon(&self) -> bool {
        self.zone.as_deref().is_some_and(is_dungeon)
    }
}

impl RaceRestricted for Step {
    fn race_restrictions(&self) -> Option<&[String]> {
        self.races.as_deref()
    }
}

impl ClassRestricted for Step {
    fn class_restrictions(&self) -> Option<&[String]> {
        self.classes.as_deref()
    }
}
