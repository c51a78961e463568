//! Campaign aggregate and its owned character.

mod campaign;
mod character;

pub use campaign::{Campaign, CampaignDraft};
pub use character::Character;
