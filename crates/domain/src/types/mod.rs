//! Closed enumerations for character creation
//!
//! Races, classes, genders, and alignments are the dropdown/card options the
//! wizard offers. They are stored as their display names in the campaigns
//! table and decoded back through `FromStr`.

mod alignment;
mod class;
mod gender;
mod race;

pub use alignment::Alignment;
pub use class::CharacterClass;
pub use gender::Gender;
pub use race::Race;
