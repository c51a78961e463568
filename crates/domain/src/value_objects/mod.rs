//! Validated value objects (valid by construction).

mod names;
mod stats;

pub use names::{CharacterName, PlayerName};
pub use stats::{Experience, Level};
