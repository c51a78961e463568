//! Wizard progress state machine
//!
//! A campaign's position in the linear character-creation flow. The state is
//! persisted as an integer code so a half-finished campaign survives process
//! restarts and resumes at the exact step it left off:
//!
//! | code | state            |
//! |------|------------------|
//! |  1   | AwaitingDetails  |
//! |  2   | AwaitingRace     |
//! |  3   | AwaitingClass    |
//! | -1   | Complete         |
//!
//! Transitions only ever move forward; there is no path that skips a step or
//! returns to an earlier one. `Complete` is terminal — re-entering any step
//! on a complete campaign edits in place without touching progress.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Position of a campaign in the creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardProgress {
    /// Initial details (names, level, measurements, experience) pending.
    AwaitingDetails,
    /// Race selection pending.
    AwaitingRace,
    /// Class selection pending.
    AwaitingClass,
    /// Wizard finished; the campaign is fully editable.
    Complete,
}

impl WizardProgress {
    /// The integer code stored in the `progress` column.
    pub fn code(&self) -> i64 {
        match self {
            WizardProgress::AwaitingDetails => 1,
            WizardProgress::AwaitingRace => 2,
            WizardProgress::AwaitingClass => 3,
            WizardProgress::Complete => -1,
        }
    }

    /// Decode a stored progress code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for any code outside {1, 2, 3, -1}.
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        match code {
            1 => Ok(WizardProgress::AwaitingDetails),
            2 => Ok(WizardProgress::AwaitingRace),
            3 => Ok(WizardProgress::AwaitingClass),
            -1 => Ok(WizardProgress::Complete),
            other => Err(DomainError::parse(format!(
                "Invalid wizard progress code: {other}"
            ))),
        }
    }

    /// The state reached by completing the current step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` when called on
    /// `Complete`; finished campaigns are edited in place, never advanced.
    pub fn advance(&self) -> Result<Self, DomainError> {
        match self {
            WizardProgress::AwaitingDetails => Ok(WizardProgress::AwaitingRace),
            WizardProgress::AwaitingRace => Ok(WizardProgress::AwaitingClass),
            WizardProgress::AwaitingClass => Ok(WizardProgress::Complete),
            WizardProgress::Complete => Err(DomainError::InvalidStateTransition(
                "Campaign creation is already complete".to_string(),
            )),
        }
    }

    /// True once the wizard has finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, WizardProgress::Complete)
    }
}

impl fmt::Display for WizardProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardProgress::AwaitingDetails => "awaiting details",
            WizardProgress::AwaitingRace => "awaiting race",
            WizardProgress::AwaitingClass => "awaiting class",
            WizardProgress::Complete => "complete",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for state in [
            WizardProgress::AwaitingDetails,
            WizardProgress::AwaitingRace,
            WizardProgress::AwaitingClass,
            WizardProgress::Complete,
        ] {
            assert_eq!(WizardProgress::from_code(state.code()).unwrap(), state);
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        for code in [0, 4, -2, 99] {
            let err = WizardProgress::from_code(code).unwrap_err();
            assert!(matches!(err, DomainError::Parse(_)));
        }
    }

    #[test]
    fn advance_walks_the_steps_in_order() {
        let start = WizardProgress::AwaitingDetails;
        let race = start.advance().unwrap();
        assert_eq!(race, WizardProgress::AwaitingRace);
        let class = race.advance().unwrap();
        assert_eq!(class, WizardProgress::AwaitingClass);
        let done = class.advance().unwrap();
        assert_eq!(done, WizardProgress::Complete);
        assert!(done.is_complete());
    }

    #[test]
    fn complete_is_terminal() {
        let err = WizardProgress::Complete.advance().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
    }

    #[test]
    fn advancing_never_decreases_the_persisted_code() {
        // -1 is the terminal marker; among the forward states the code only grows.
        let mut state = WizardProgress::AwaitingDetails;
        let mut last_code = state.code();
        while !state.is_complete() {
            state = state.advance().unwrap();
            if !state.is_complete() {
                assert!(state.code() > last_code);
                last_code = state.code();
            }
        }
    }
}
