//! Bounded numeric value objects for character progression.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lowest valid character level.
pub const MIN_LEVEL: u8 = 1;
/// Highest valid character level.
pub const MAX_LEVEL: u8 = 20;

// ============================================================================
// Level
// ============================================================================

/// A validated character level, bounded to [1, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Create a new validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is outside [1, 20].
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&value) {
            return Err(DomainError::validation(format!(
                "Level must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(MIN_LEVEL)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

// ============================================================================
// Experience
// ============================================================================

/// Experience points. Non-negative by construction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Experience(u32);

impl Experience {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Experience {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Experience> for u32 {
    fn from(exp: Experience) -> u32 {
        exp.0
    }
}

// ============================================================================
// Tests
// ============================================================================
