//! Campaign roster read model
//!
//! Assembles the card list shown on the home screen and handles the
//! type-the-name deletion confirmation. Pure read-model work lives here so
//! the UI layer only renders.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use questkeeper_domain::{assets, common::humanize_since, Campaign, CampaignId};

use crate::application::ports::{CampaignRepositoryPort, RepositoryError};

/// What the card's action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RosterAction {
    /// Campaign is complete: open the full-edit form.
    Edit,
    /// Wizard unfinished: resume at the persisted step.
    Resume,
}

/// One campaign card, ready to render (or hand to a UI layer as JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCard {
    pub id: CampaignId,
    /// The character's full name, also the deletion confirmation phrase.
    pub title: String,
    /// e.g. "Level 5 Half-Orc Barbarian, played by Alice"
    pub description: String,
    /// e.g. "4 minutes ago"
    pub last_updated: String,
    pub portrait_asset: &'static str,
    pub class_icon_asset: Option<&'static str>,
    pub action: RosterAction,
}

/// Errors from roster operations.
#[derive(Debug, Error, Clone)]
pub enum RosterError {
    /// The typed confirmation did not match the character's full name.
    /// The record is untouched.
    #[error("Confirmation does not match the character name")]
    ConfirmationMismatch,

    /// The campaign id no longer exists.
    #[error("Campaign not found: {0}")]
    NotFound(CampaignId),

    /// Underlying storage failure; not retried.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for RosterError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => RosterError::NotFound(id),
            RepositoryError::Storage(msg) => RosterError::Storage(msg),
        }
    }
}

/// The roster service.
pub struct CampaignRoster {
    repository: Arc<dyn CampaignRepositoryPort>,
}

impl CampaignRoster {
    pub fn new(repository: Arc<dyn CampaignRepositoryPort>) -> Self {
        Self { repository }
    }

    /// All campaigns as cards, most recently touched first.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<CampaignCard>, RosterError> {
        let campaigns = self.repository.fetch_all().await?;
        Ok(campaigns
            .iter()
            .map(|campaign| Self::card(campaign, now))
            .collect())
    }

    /// Delete a campaign after exact-match confirmation of the character's
    /// full name. Mismatch is a validation error, never a storage error.
    pub async fn delete(&self, id: CampaignId, confirmation: &str) -> Result<(), RosterError> {
        let campaign = self.repository.fetch_one(id).await?;
        if confirmation != campaign.character().full_name() {
            return Err(RosterError::ConfirmationMismatch);
        }
        self.repository.delete(id).await?;
        info!(campaign_id = %id, "campaign deleted");
        Ok(())
    }

    fn card(campaign: &Campaign, now: DateTime<Utc>) -> CampaignCard {
        let character = campaign.character();
        CampaignCard {
            id: campaign.id(),
            title: character.full_name(),
            description: format!(
                "{}, played by {}",
                character.summary(),
                campaign.player_name()
            ),
            last_updated: humanize_since(campaign.updated_at(), now),
            portrait_asset: assets::portrait_for(character.race()),
            class_icon_asset: assets::class_icon_for(character.class()),
            action: if campaign.progress().is_complete() {
                RosterAction::Edit
            } else {
                RosterAction::Resume
            },
        }
    }
}
