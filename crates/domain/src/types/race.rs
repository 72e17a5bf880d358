//! Playable races, their factions and their starting guide documents

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playable race.
///
/// Serialized by its canonical name (`"NightElf"`, not `"night_elf"`), which is
/// also the token used in guide restriction lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerRace {
    Dwarf,
    Gnome,
    Human,
    NightElf,
    Orc,
    Troll,
    Undead,
    Tauren,
}

impl PlayerRace {
    /// Get all races in picker order
    pub fn all() -> &'static [PlayerRace] {
        &[
            PlayerRace::Dwarf,
            PlayerRace::Gnome,
            PlayerRace::Human,
            PlayerRace::NightElf,
            PlayerRace::Orc,
            PlayerRace::Troll,
            PlayerRace::Undead,
            PlayerRace::Tauren,
        ]
    }

    /// Canonical name, as used in restriction lists and storage
    pub fn name(&self) -> &'static str {
        match self {
            PlayerRace::Dwarf => "Dwarf",
            PlayerRace::Gnome => "Gnome",
            PlayerRace::Human => "Human",
            PlayerRace::NightElf => "NightElf",
            PlayerRace::Orc => "Orc",
            PlayerRace::Troll => "Troll",
            PlayerRace::Undead => "Undead",
            PlayerRace::Tauren => "Tauren",
        }
    }

    /// Human-readable name for pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerRace::NightElf => "Night Elf",
            other => other.name(),
        }
    }

    pub fn faction(&self) -> Faction {
        match self {
            PlayerRace::Human | PlayerRace::Dwarf | PlayerRace::Gnome | PlayerRace::NightElf => {
                Faction::Alliance
            }
            PlayerRace::Orc | PlayerRace::Troll | PlayerRace::Undead | PlayerRace::Tauren => {
                Faction::Horde
            }
        }
    }

    /// Name of the first guide document in this race's chain.
    ///
    /// Returns `None` for races that have no guide content yet.
    pub fn starting_guide(&self) -> Option<&'static str> {
        match self {
            PlayerRace::Human => Some("1-6_northshire_human"),
            PlayerRace::Dwarf | PlayerRace::Gnome => Some("1-6_coldridge_valley_dwarf_gnome"),
            PlayerRace::NightElf => Some("1-6_shadowglen_NE"),
            PlayerRace::Orc | PlayerRace::Troll | PlayerRace::Undead | PlayerRace::Tauren => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.starting_guide().is_some()
    }
}

impl fmt::Display for PlayerRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerRace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerRace::all()
            .iter()
            .copied()
            .find(|race| {
                race.name().eq_ignore_ascii_case(wanted)
                    || race.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                DomainError::parse(format!(
                    "Unknown race: '{}'. Valid values: Dwarf, Gnome, Human, NightElf, Orc, \
                    Troll, Undead, Tauren",
                    s
                ))
            })
    }
}

/// Faction a race belongs to; also the top-level namespace of guide documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Alliance,
    Horde,
}

impl Faction {
    /// Lowercase path segment under which this faction's documents live
    pub fn path_segment(&self) -> &'static str {
        match self {
            Faction::Alliance => "alliance",
            Faction::Horde => "horde",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::Alliance => f.write_str("Alliance"),
            Faction::Horde => f.write_str("Horde"),
        }
    }
}
