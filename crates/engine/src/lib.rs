//! QuestKeeper engine
//!
//! Application services for the campaign wizard and roster, the outbound
//! repository port they depend on, and the SQLite adapter behind it.

pub mod application;
pub mod infrastructure;

pub use application::ports::{CampaignRepositoryPort, ClockPort, RepositoryError};
pub use application::roster::{CampaignCard, CampaignRoster, RosterAction, RosterError};
pub use application::wizard::{
    CampaignWizard, DetailsInput, EditInput, Field, FieldError, ValidationErrors, WizardError,
    WizardRoute,
};
pub use infrastructure::clock::{FixedClock, SystemClock};
pub use infrastructure::config::{connect, EngineConfig};
pub use infrastructure::persistence::SqliteCampaignRepository;
