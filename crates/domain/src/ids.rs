use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a campaign row.
///
/// Assigned by the record store on insert (SQLite rowid) and stable for the
/// life of the record; a `CampaignDraft` has no id until it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignId(i64);

impl CampaignId {
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CampaignId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CampaignId> for i64 {
    fn from(value: CampaignId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_i64() {
        let id = CampaignId::from_raw(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(CampaignId::from(42), id);
    }

    #[test]
    fn displays_as_number() {
        assert_eq!(CampaignId::from_raw(7).to_string(), "7");
    }
}
