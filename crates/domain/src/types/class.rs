//! Character classes offered by the class-selection step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl CharacterClass {
    /// All classes, in the order the selection cards present them.
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Barbarian,
            CharacterClass::Bard,
            CharacterClass::Cleric,
            CharacterClass::Druid,
            CharacterClass::Fighter,
            CharacterClass::Monk,
            CharacterClass::Paladin,
            CharacterClass::Ranger,
            CharacterClass::Rogue,
            CharacterClass::Sorcerer,
            CharacterClass::Warlock,
            CharacterClass::Wizard,
        ]
    }

    /// Display name, also the stored representation.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Barbarian => "Barbarian",
            CharacterClass::Bard => "Bard",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Druid => "Druid",
            CharacterClass::Fighter => "Fighter",
            CharacterClass::Monk => "Monk",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Sorcerer => "Sorcerer",
            CharacterClass::Warlock => "Warlock",
            CharacterClass::Wizard => "Wizard",
        }
    }

    /// One-line description shown on the selection card.
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Barbarian => "A fierce warrior who channels primal fury in battle",
            CharacterClass::Bard => "An inspiring magician whose power echoes the music of creation",
            CharacterClass::Cleric => "A priestly champion who wields divine magic",
            CharacterClass::Druid => "A priest of the old faith, wielding the powers of nature",
            CharacterClass::Fighter => "A master of martial combat, skilled with armor and weapons",
            CharacterClass::Monk => "A master of martial arts, harnessing the power of the body",
            CharacterClass::Paladin => "A holy warrior bound to a sacred oath",
            CharacterClass::Ranger => "A warrior who uses martial prowess and nature magic",
            CharacterClass::Rogue => "A scoundrel who uses stealth and trickery to overcome obstacles",
            CharacterClass::Sorcerer => "A spellcaster who draws on inherent magic from a gift or bloodline",
            CharacterClass::Warlock => "A wielder of magic derived from a bargain with an extraplanar entity",
            CharacterClass::Wizard => "A scholarly magic-user capable of manipulating reality",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .find(|class| class.display_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown class: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        for class in CharacterClass::all() {
            let parsed: CharacterClass = class.display_name().parse().unwrap();
            assert_eq!(parsed, *class);
        }
    }

    #[test]
    fn unknown_class_rejected() {
        assert!("Artificer".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn every_class_has_a_description() {
        for class in CharacterClass::all() {
            assert!(!class.description().is_empty());
        }
    }
}
