//! Campaign creation wizard
//!
//! A linear, resumable flow over the repository port. Each step validates
//! its whole form (every violation reported at once, never fail-fast),
//! writes the record back, and advances the persisted progress. Re-entering
//! a finished campaign edits in place without moving progress.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use questkeeper_domain::{
    Alignment, Campaign, CampaignDraft, CampaignId, Character, CharacterClass, CharacterName,
    DomainError, Experience, Gender, Level, PlayerName, Race, WizardProgress,
};

use crate::application::ports::{CampaignRepositoryPort, RepositoryError};

// ============================================================================
// Validation report
// ============================================================================

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PlayerName,
    FirstName,
    LastName,
    Gender,
    Alignment,
    Level,
    Height,
    Weight,
    Age,
    Experience,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::PlayerName => "Player name",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Gender => "Gender",
            Field::Alignment => "Alignment",
            Field::Level => "Level",
            Field::Height => "Height",
            Field::Weight => "Weight",
            Field::Age => "Age",
            Field::Experience => "Experience",
        }
    }
}

/// A single violated field with its inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Everything wrong with a submitted form. A non-empty report blocks the
/// step entirely; partial saves never happen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

// ============================================================================
// Step inputs
// ============================================================================

/// Raw form input for the details step (and the details section of a full
/// edit). Text fields arrive as the user typed them; selectors arrive as
/// `None` while still on their placeholder row.
#[derive(Debug, Clone, Default)]
pub struct DetailsInput {
    pub player_name: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub alignment: Option<Alignment>,
    pub level: String,
    pub height: String,
    pub weight: String,
    pub age: String,
    pub experience: String,
}

/// Details that passed full-form validation.
#[derive(Debug, Clone)]
struct ValidatedDetails {
    player_name: PlayerName,
    first_name: CharacterName,
    last_name: CharacterName,
    gender: Gender,
    alignment: Alignment,
    level: Level,
    height: String,
    weight: String,
    age: String,
    experience: Experience,
}

impl DetailsInput {
    /// Validate the whole form, collecting every violation.
    fn validate(&self) -> Result<ValidatedDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let player_name = Self::required_name(
            &mut errors,
            Field::PlayerName,
            PlayerName::new(&self.player_name),
            self.player_name.trim().is_empty(),
        );
        let first_name = Self::required_name(
            &mut errors,
            Field::FirstName,
            CharacterName::new(&self.first_name),
            self.first_name.trim().is_empty(),
        );
        let last_name = Self::required_name(
            &mut errors,
            Field::LastName,
            CharacterName::new(&self.last_name),
            self.last_name.trim().is_empty(),
        );

        let gender = self.gender;
        if gender.is_none() {
            errors.push(Field::Gender, "Gender selection is required");
        }
        let alignment = self.alignment;
        if alignment.is_none() {
            errors.push(Field::Alignment, "Alignment selection is required");
        }

        let level = Self::parse_level(&mut errors, &self.level);
        let experience = Self::parse_experience(&mut errors, &self.experience);

        let height = Self::required_text(&mut errors, Field::Height, &self.height);
        let weight = Self::required_text(&mut errors, Field::Weight, &self.weight);
        let age = Self::required_text(&mut errors, Field::Age, &self.age);

        if !errors.is_empty() {
            return Err(errors);
        }

        // All Options are Some here; the collected report is empty.
        match (
            player_name,
            first_name,
            last_name,
            gender,
            alignment,
            level,
            experience,
            height,
            weight,
            age,
        ) {
            (
                Some(player_name),
                Some(first_name),
                Some(last_name),
                Some(gender),
                Some(alignment),
                Some(level),
                Some(experience),
                Some(height),
                Some(weight),
                Some(age),
            ) => Ok(ValidatedDetails {
                player_name,
                first_name,
                last_name,
                gender,
                alignment,
                level,
                height,
                weight,
                age,
                experience,
            }),
            _ => Err(errors),
        }
    }

    fn required_name<T>(
        errors: &mut ValidationErrors,
        field: Field,
        parsed: Result<T, DomainError>,
        was_blank: bool,
    ) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(_) if was_blank => {
                errors.push(field, format!("{} is required", field.label()));
                None
            }
            Err(err) => {
                errors.push(field, err.to_string());
                None
            }
        }
    }

    fn required_text(errors: &mut ValidationErrors, field: Field, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            errors.push(field, format!("{} is required", field.label()));
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn parse_level(errors: &mut ValidationErrors, raw: &str) -> Option<Level> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            errors.push(Field::Level, "Level is required");
            return None;
        }
        let Ok(value) = trimmed.parse::<i64>() else {
            errors.push(Field::Level, "Level must be a whole number");
            return None;
        };
        match u8::try_from(value).ok().and_then(|v| Level::new(v).ok()) {
            Some(level) => Some(level),
            None => {
                errors.push(Field::Level, "Level must be between 1 and 20");
                None
            }
        }
    }

    fn parse_experience(errors: &mut ValidationErrors, raw: &str) -> Option<Experience> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            errors.push(Field::Experience, "Experience is required");
            return None;
        }
        match trimmed.parse::<u32>() {
            Ok(value) => Some(Experience::new(value)),
            Err(_) => {
                errors.push(
                    Field::Experience,
                    "Experience must be a non-negative whole number",
                );
                None
            }
        }
    }
}

/// Full edit of a finished campaign: the details form plus the fields the
/// later wizard steps own.
#[derive(Debug, Clone)]
pub struct EditInput {
    pub details: DetailsInput,
    pub race: Race,
    pub class: CharacterClass,
    pub background: String,
}

// ============================================================================
// Errors and routing
// ============================================================================

/// Errors from wizard operations.
#[derive(Debug, Error, Clone)]
pub enum WizardError {
    /// Full-form validation report; the step is blocked until fixed.
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    /// The campaign id no longer exists.
    #[error("Campaign not found: {0}")]
    NotFound(CampaignId),

    /// A step was submitted out of order.
    #[error("Campaign is {actual}, expected {expected}")]
    StepMismatch {
        expected: &'static str,
        actual: WizardProgress,
    },

    /// Underlying storage failure; not retried.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for WizardError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => WizardError::NotFound(id),
            RepositoryError::Storage(msg) => WizardError::Storage(msg),
        }
    }
}

impl From<ValidationErrors> for WizardError {
    fn from(errors: ValidationErrors) -> Self {
        WizardError::Invalid(errors)
    }
}

/// Which screen a campaign id should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardRoute {
    /// Step 1: the details form.
    Details,
    /// Step 2: race selection.
    Race,
    /// Step 3: class selection.
    Class,
    /// Finished: the full-edit form.
    Edit,
}

// ============================================================================
// Service
// ============================================================================

/// The wizard service. Holds the repository it persists through; no global
/// state.
pub struct CampaignWizard {
    repository: Arc<dyn CampaignRepositoryPort>,
}

impl CampaignWizard {
    pub fn new(repository: Arc<dyn CampaignRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Where an existing campaign resumes. Progress is persisted, so this
    /// works across process restarts.
    pub async fn route(&self, id: CampaignId) -> Result<WizardRoute, WizardError> {
        let campaign = self.repository.fetch_one(id).await?;
        Ok(match campaign.progress() {
            WizardProgress::AwaitingDetails => WizardRoute::Details,
            WizardProgress::AwaitingRace => WizardRoute::Race,
            WizardProgress::AwaitingClass => WizardRoute::Class,
            WizardProgress::Complete => WizardRoute::Edit,
        })
    }

    /// Complete the details step.
    ///
    /// With no id this is a fresh creation: the record is inserted (the
    /// store starts it at `AwaitingDetails`) and immediately advanced to
    /// `AwaitingRace`. With an id it either finishes a resumed details step
    /// or edits a finished campaign's detail fields in place.
    pub async fn submit_details(
        &self,
        existing: Option<CampaignId>,
        input: &DetailsInput,
    ) -> Result<CampaignId, WizardError> {
        let details = input.validate()?;

        match existing {
            None => {
                let character = Character::new(
                    details.first_name.clone(),
                    details.last_name.clone(),
                    details.gender,
                    details.alignment,
                )
                .with_level(details.level)
                .with_measurements(&details.height, &details.weight, &details.age)
                .with_experience(details.experience);
                let draft = CampaignDraft::new(details.player_name.clone(), character);

                let id = self.repository.create(&draft).await?;
                let mut campaign = self.repository.fetch_one(id).await?;
                self.advance(&mut campaign)?;
                self.repository.update(&campaign).await?;
                info!(campaign_id = %id, "campaign created, awaiting race selection");
                Ok(id)
            }
            Some(id) => {
                let mut campaign = self.repository.fetch_one(id).await?;
                match campaign.progress() {
                    WizardProgress::AwaitingDetails => {
                        Self::apply_details(&mut campaign, &details);
                        self.advance(&mut campaign)?;
                        self.repository.update(&campaign).await?;
                        debug!(campaign_id = %id, "details step completed on resume");
                        Ok(id)
                    }
                    WizardProgress::Complete => {
                        Self::apply_details(&mut campaign, &details);
                        self.repository.update(&campaign).await?;
                        debug!(campaign_id = %id, "details edited in place");
                        Ok(id)
                    }
                    actual => Err(WizardError::StepMismatch {
                        expected: "awaiting details or complete",
                        actual,
                    }),
                }
            }
        }
    }

    /// Complete the race step, or change race on a finished campaign.
    pub async fn submit_race(&self, id: CampaignId, race: Race) -> Result<(), WizardError> {
        let mut campaign = self.repository.fetch_one(id).await?;
        match campaign.progress() {
            WizardProgress::AwaitingRace => {
                campaign.character_mut().set_race(race);
                self.advance(&mut campaign)?;
                self.repository.update(&campaign).await?;
                debug!(campaign_id = %id, %race, "race selected, awaiting class selection");
                Ok(())
            }
            WizardProgress::Complete => {
                campaign.character_mut().set_race(race);
                self.repository.update(&campaign).await?;
                debug!(campaign_id = %id, %race, "race edited in place");
                Ok(())
            }
            actual => Err(WizardError::StepMismatch {
                expected: "awaiting race or complete",
                actual,
            }),
        }
    }

    /// Complete the class step (terminal), or change class on a finished
    /// campaign.
    pub async fn submit_class(
        &self,
        id: CampaignId,
        class: CharacterClass,
    ) -> Result<(), WizardError> {
        let mut campaign = self.repository.fetch_one(id).await?;
        match campaign.progress() {
            WizardProgress::AwaitingClass => {
                campaign.character_mut().set_class(class);
                self.advance(&mut campaign)?;
                self.repository.update(&campaign).await?;
                info!(campaign_id = %id, %class, "class selected, campaign complete");
                Ok(())
            }
            WizardProgress::Complete => {
                campaign.character_mut().set_class(class);
                self.repository.update(&campaign).await?;
                debug!(campaign_id = %id, %class, "class edited in place");
                Ok(())
            }
            actual => Err(WizardError::StepMismatch {
                expected: "awaiting class or complete",
                actual,
            }),
        }
    }

    /// Full edit of a finished campaign. Exactly one write; progress is
    /// untouched.
    pub async fn edit(&self, id: CampaignId, input: &EditInput) -> Result<(), WizardError> {
        let details = input.details.validate()?;
        let mut campaign = self.repository.fetch_one(id).await?;
        if !campaign.progress().is_complete() {
            return Err(WizardError::StepMismatch {
                expected: "complete",
                actual: campaign.progress(),
            });
        }

        Self::apply_details(&mut campaign, &details);
        let character = campaign.character_mut();
        character.set_race(input.race);
        character.set_class(input.class);
        character.set_background(input.background.trim());
        self.repository.update(&campaign).await?;
        debug!(campaign_id = %id, "campaign edited");
        Ok(())
    }

    fn apply_details(campaign: &mut Campaign, details: &ValidatedDetails) {
        campaign.set_player_name(details.player_name.clone());
        let character = campaign.character_mut();
        character.set_names(details.first_name.clone(), details.last_name.clone());
        character.set_gender(details.gender);
        character.set_alignment(details.alignment);
        character.set_level(details.level);
        character.set_measurements(&details.height, &details.weight, &details.age);
        character.set_experience(details.experience);
    }

    fn advance(&self, campaign: &mut Campaign) -> Result<(), WizardError> {
        // Transitions are checked before calling; a failure here means the
        // progress column was corrupted out from under us.
        campaign
            .advance_progress()
            .map_err(|e| WizardError::Storage(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
