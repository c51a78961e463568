//! QuestKeeper domain layer
//!
//! Pure domain types for campaign management: the `Campaign`/`Character`
//! aggregates, validated value objects, the wizard progress state machine,
//! and the race/class enumerations with their asset mappings. No I/O here;
//! persistence and services live in `questkeeper-engine`.

pub mod aggregates;
pub mod assets;
pub mod common;
pub mod error;
pub mod ids;
pub mod progress;
pub mod types;
pub mod value_objects;

pub use aggregates::{Campaign, CampaignDraft, Character};
pub use error::DomainError;
pub use ids::CampaignId;
pub use progress::WizardProgress;
pub use types::{Alignment, CharacterClass, Gender, Race};
pub use value_objects::{CharacterName, Experience, Level, PlayerName};
