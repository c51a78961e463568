//! Validated name newtypes for campaigns and characters
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields
const MAX_NAME_LENGTH: usize = 100;

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name component (non-empty, <=100 chars, trimmed)
///
/// Used for both the first and last name of a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod player_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = PlayerName::new("Alice").unwrap();
            assert_eq!(name.as_str(), "Alice");
            assert_eq!(name.to_string(), "Alice");
        }

        #[test]
        fn empty_name_rejected() {
            let result = PlayerName::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            let result = PlayerName::new("   ");
            assert!(result.is_err());
        }

        #[test]
        fn name_is_trimmed() {
            let name = PlayerName::new("  Alice  ").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }

        #[test]
        fn too_long_rejected() {
            let result = PlayerName::new("a".repeat(101));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("100"));
        }

        #[test]
        fn max_length_accepted() {
            let name = PlayerName::new("a".repeat(100)).unwrap();
            assert_eq!(name.as_str().len(), 100);
        }
    }

    mod character_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = CharacterName::new("Aria").unwrap();
            assert_eq!(name.as_str(), "Aria");
        }

        #[test]
        fn empty_name_rejected() {
            let result = CharacterName::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn name_is_trimmed() {
            let name = CharacterName::new("  Stone  ").unwrap();
            assert_eq!(name.as_str(), "Stone");
        }

        #[test]
        fn try_from_string() {
            let name: CharacterName = "Aria".to_string().try_into().unwrap();
            assert_eq!(name.as_str(), "Aria");
        }

        #[test]
        fn into_string() {
            let name = CharacterName::new("Stone").unwrap();
            let s: String = name.into();
            assert_eq!(s, "Stone");
        }
    }
}
