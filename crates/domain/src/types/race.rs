//! Character races offered by the race-selection step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A playable character race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Dragonborn,
    Dwarf,
    Elf,
    Gnome,
    HalfElf,
    HalfOrc,
    Halfling,
    Human,
    Tiefling,
}

impl Race {
    /// All races, in the order the selection cards present them.
    pub fn all() -> &'static [Race] {
        &[
            Race::Dragonborn,
            Race::Dwarf,
            Race::Elf,
            Race::Gnome,
            Race::HalfElf,
            Race::HalfOrc,
            Race::Halfling,
            Race::Human,
            Race::Tiefling,
        ]
    }

    /// Display name, also the stored representation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Race::Dragonborn => "Dragonborn",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::Gnome => "Gnome",
            Race::HalfElf => "Half-Elf",
            Race::HalfOrc => "Half-Orc",
            Race::Halfling => "Halfling",
            Race::Human => "Human",
            Race::Tiefling => "Tiefling",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::all()
            .iter()
            .find(|race| race.display_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {s}")))
    }
}
