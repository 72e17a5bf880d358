//! Race/class eligibility rules for guide content
//!
//! A restriction list is a list of tokens. A bare name (`"Mage"`) is an
//! inclusion, a `!`-prefixed name (`"!Mage"`) is an exclusion:
//!
//! - absent or empty list: shown to everyone
//! - `["Mage", "Priest"]`: shown only to Mage or Priest
//! - `["!Mage"]`: shown to everyone except Mage
//!
//! Exclusions are checked first and win over inclusions. Content is always
//! shown while no race/class has been chosen.

use crate::types::{PlayerClass, PlayerRace};

const EXCLUSION_PREFIX: char = '!';

/// Decide whether content with the given restriction list applies to `current`.
pub fn is_eligible<S: AsRef<str>>(restrictions: Option<&[S]>, current: Option<&str>) -> bool {
    let Some(current) = current else {
        return true;
    };
    let Some(restrictions) = restrictions.filter(|r| !r.is_empty()) else {
        return true;
    };

    let mut has_inclusions = false;
    let mut included = false;
    for token in restrictions {
        let token = token.as_ref();
        match token.strip_prefix(EXCLUSION_PREFIX) {
            Some(excluded) if excluded == current => return false,
            Some(_) => {}
            None => {
                has_inclusions = true;
                included |= token == current;
            }
        }
    }

    !has_inclusions || included
}

pub fn should_show_for_race<S: AsRef<str>>(races: Option<&[S]>, race: Option<PlayerRace>) -> bool {
    is_eligible(races, race.as_ref().map(PlayerRace::name))
}

pub fn should_show_for_class<S: AsRef<str>>(
    classes: Option<&[S]>,
    class: Option<PlayerClass>,
) -> bool {
    is_eligible(classes, class.as_ref().map(PlayerClass::name))
}

/// Content carrying a race restriction list
pub trait RaceRestricted {
    fn race_restrictions(&self) -> Option<&[String]>;
}

/// Content carrying a class restriction list
pub trait ClassRestricted {
    fn class_restrictions(&self) -> Option<&[String]>;
}

/// Keep only the items shown to `race`
pub fn filter_by_race<T: RaceRestricted>(items: Vec<T>, race: PlayerRace) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| should_show_for_race(item.race_restrictions(), Some(race)))
        .collect()
}

/// Keep only the items shown to `class`
pub fn filter_by_class<T: ClassRestricted>(items: Vec<T>, class: PlayerClass) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| should_show_for_class(item.class_restrictions(), Some(class)))
        .collect()
}
