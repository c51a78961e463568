//! Character - the hero a campaign is built around
//!
//! A character never exists without its owning campaign (one-to-one,
//! exclusive ownership). It starts as names plus the details-step fields;
//! race and class arrive through later wizard steps, so both stay optional
//! until chosen.

use serde::{Deserialize, Serialize};

use crate::types::{Alignment, CharacterClass, Gender, Race};
use crate::value_objects::{CharacterName, Experience, Level};

/// The character owned by a campaign.
///
/// # Invariants
///
/// - Both name components are non-empty and trimmed (enforced by
///   `CharacterName`)
/// - `level` is within [1, 20] (enforced by `Level`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    first_name: CharacterName,
    last_name: CharacterName,
    race: Option<Race>,
    class: Option<CharacterClass>,
    gender: Gender,
    alignment: Alignment,
    level: Level,
    height: String,
    weight: String,
    age: String,
    experience: Experience,
    background: String,
}

impl Character {
    /// Create a character with just its names; every other field starts at
    /// its details-step default and is filled in by the wizard.
    pub fn new(
        first_name: CharacterName,
        last_name: CharacterName,
        gender: Gender,
        alignment: Alignment,
    ) -> Self {
        Self {
            first_name,
            last_name,
            race: None,
            class: None,
            gender,
            alignment,
            level: Level::default(),
            height: String::new(),
            weight: String::new(),
            age: String::new(),
            experience: Experience::default(),
            background: String::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn first_name(&self) -> &CharacterName {
        &self.first_name
    }

    pub fn last_name(&self) -> &CharacterName {
        &self.last_name
    }

    /// "First Last", the form users must retype to confirm deletion.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn race(&self) -> Option<Race> {
        self.race
    }

    pub fn class(&self) -> Option<CharacterClass> {
        self.class
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// One-line card description, e.g. "Level 5 Half-Orc Barbarian".
    /// Unchosen race/class are simply omitted.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Level {}", self.level)];
        if let Some(race) = self.race {
            parts.push(race.to_string());
        }
        if let Some(class) = self.class {
            parts.push(class.to_string());
        }
        if parts.len() == 1 {
            parts.push("adventurer".to_string());
        }
        parts.join(" ")
    }

    // =========================================================================
    // Builder methods (for construction and loading from storage)
    // =========================================================================

    pub fn with_race(mut self, race: Option<Race>) -> Self {
        self.race = race;
        self
    }

    pub fn with_class(mut self, class: Option<CharacterClass>) -> Self {
        self.class = class;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_measurements(
        mut self,
        height: impl Into<String>,
        weight: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        self.height = height.into();
        self.weight = weight.into();
        self.age = age.into();
        self
    }

    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    // =========================================================================
    // Mutation methods
    // =========================================================================

    pub fn set_names(&mut self, first_name: CharacterName, last_name: CharacterName) {
        self.first_name = first_name;
        self.last_name = last_name;
    }

    pub fn set_race(&mut self, race: Race) {
        self.race = Some(race);
    }

    pub fn set_class(&mut self, class: CharacterClass) {
        self.class = Some(class);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn set_measurements(
        &mut self,
        height: impl Into<String>,
        weight: impl Into<String>,
        age: impl Into<String>,
    ) {
        self.height = height.into();
        self.weight = weight.into();
        self.age = age.into();
    }

    pub fn set_experience(&mut self, experience: Experience) {
        self.experience = experience;
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }
}
