//! Gender options for the details step dropdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Character gender as offered by the details-step selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

impl Gender {
    /// All genders, in dropdown order.
    pub fn all() -> &'static [Gender] {
        &[Gender::Female, Gender::Male, Gender::NonBinary]
    }

    /// Display name, also the stored representation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-Binary",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::all()
            .iter()
            .find(|gender| gender.display_name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown gender: {s}")))
    }
}
