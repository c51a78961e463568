//! Outbound ports the application services depend on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use questkeeper_domain::{Campaign, CampaignDraft, CampaignId};

/// Errors surfaced by the campaign record store.
#[derive(Debug, Error, Clone)]
pub enum RepositoryError {
    /// No row matches the requested id.
    #[error("Campaign not found: {0}")]
    NotFound(CampaignId),

    /// Underlying storage failure. Fatal for the current operation; never
    /// retried.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// The campaign record store contract.
///
/// One table of campaign+character records keyed by a store-assigned id.
/// Implementations own timestamp assignment so every write refreshes
/// `updated_at` and `created_at` is set exactly once.
#[async_trait]
pub trait CampaignRepositoryPort: Send + Sync {
    /// Insert a new record. Sets both timestamps, forces the starting
    /// wizard progress, and returns the assigned id.
    async fn create(&self, draft: &CampaignDraft) -> Result<CampaignId, RepositoryError>;

    /// Fetch a single record by id.
    async fn fetch_one(&self, id: CampaignId) -> Result<Campaign, RepositoryError>;

    /// Every record, most recently updated first.
    async fn fetch_all(&self) -> Result<Vec<Campaign>, RepositoryError>;

    /// Overwrite all mutable fields by id and refresh `updated_at`.
    /// Returns the affected-row count; 0 means the id no longer exists.
    async fn update(&self, campaign: &Campaign) -> Result<u64, RepositoryError>;

    /// Remove a record by id. Deleting a missing id is a no-op.
    async fn delete(&self, id: CampaignId) -> Result<(), RepositoryError>;
}

/// Clock abstraction so repositories and tests agree on "now".
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
