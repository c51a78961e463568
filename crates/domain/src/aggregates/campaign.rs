//! Campaign aggregate - a player plus their owned character
//!
//! A `CampaignDraft` is the pre-insert shape: the record store assigns the
//! id, both timestamps, and the starting progress when it is created. A
//! `Campaign` is always a persisted record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::ids::CampaignId;
use crate::progress::WizardProgress;
use crate::value_objects::PlayerName;

/// What the caller hands to the store to create a campaign. The store owns
/// id assignment, timestamps, and the initial progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub player_name: PlayerName,
    pub character: Character,
}

impl CampaignDraft {
    pub fn new(player_name: PlayerName, character: Character) -> Self {
        Self {
            player_name,
            character,
        }
    }
}

/// A persisted campaign record.
///
/// # Invariants
///
/// - `created_at` is set once by the store and never changes
/// - `progress` only moves forward; finished campaigns are edited in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    id: CampaignId,
    player_name: PlayerName,
    progress: WizardProgress,
    character: Character,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Reassemble a campaign from stored columns.
    pub fn from_record(
        id: CampaignId,
        player_name: PlayerName,
        progress: WizardProgress,
        character: Character,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player_name,
            progress,
            character,
            created_at,
            updated_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> CampaignId {
        self.id
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    pub fn progress(&self) -> WizardProgress {
        self.progress
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Mutation methods
    // =========================================================================

    pub fn set_player_name(&mut self, player_name: PlayerName) {
        self.player_name = player_name;
    }

    pub fn set_character(&mut self, character: Character) {
        self.character = character;
    }

    /// Move to the next wizard step. The only way to change progress on a
    /// live campaign, so it can never go backwards or skip.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the campaign is
    /// already complete.
    pub fn advance_progress(&mut self) -> Result<(), DomainError> {
        self.progress = self.progress.advance()?;
        Ok(())
    }

    /// Record-store bookkeeping: refresh `updated_at` after a write.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
