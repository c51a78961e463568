//! SQLite persistence adapters.

mod campaign_repository;

pub use campaign_repository::SqliteCampaignRepository;
