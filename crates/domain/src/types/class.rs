//! Playable classes

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playable class, serialized by its canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerClass {
    Druid,
    Hunter,
    Mage,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl PlayerClass {
    /// Get all classes in picker order
    pub fn all() -> &'static [PlayerClass] {
        &[
            PlayerClass::Druid,
            PlayerClass::Hunter,
            PlayerClass::Mage,
            PlayerClass::Paladin,
            PlayerClass::Priest,
            PlayerClass::Rogue,
            PlayerClass::Shaman,
            PlayerClass::Warlock,
            PlayerClass::Warrior,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Druid => "Druid",
            PlayerClass::Hunter => "Hunter",
            PlayerClass::Mage => "Mage",
            PlayerClass::Paladin => "Paladin",
            PlayerClass::Priest => "Priest",
            PlayerClass::Rogue => "Rogue",
            PlayerClass::Shaman => "Shaman",
            PlayerClass::Warlock => "Warlock",
            PlayerClass::Warrior => "Warrior",
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerClass::all()
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::parse(format!(
                    "Unknown class: '{}'. Valid values: Druid, Hunter, Mage, Paladin, Priest, \
                    Rogue, Shaman, Warlock, Warrior",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_parse() {
        assert_eq!("mage".parse::<PlayerClass>().unwrap(), PlayerClass::Mage);
        assert_eq!("WARRIOR".parse::<PlayerClass>().unwrap(), PlayerClass::Warrior);
        assert!("deathknight".parse::<PlayerClass>().is_err());
    }

    #[test]
    fn test_class_roundtrips_through_display() {
        for class in PlayerClass::all() {
            assert_eq!(class.to_string().parse::<PlayerClass>().unwrap(), *class);
        }
    }
}
