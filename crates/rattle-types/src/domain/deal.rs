use serde::{Deserialize, Serialize};

use super::stage::DealStage;

/// A sales pipeline opportunity.
///
/// Deals are supplied once per session and never mutated. Only `name`,
/// `company`, `value`, `stage`, `probability` and `owner` take part in
/// filtering, sorting and aggregation; the remaining fields are display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub company: String,

    /// Whole USD. Missing values read as 0.
    #[serde(default)]
    pub value: u64,

    pub stage: DealStage,

    /// Close likelihood, 0-100. Correlated with stage but not enforced.
    #[serde(default)]
    pub probability: u8,

    pub owner: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_activity: Vec<DealActivity>,
}

impl Deal {
    pub fn is_open(&self) -> bool {
        !self.stage.is_closed()
    }

    pub fn is_won(&self) -> bool {
        self.stage == DealStage::ClosedWon
    }

    pub fn is_lost(&self) -> bool {
        self.stage == DealStage::ClosedLost
    }
}

/// One entry of a deal's activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealActivity {
    pub action: String,
    /// Free-form display timestamp ("2 hours ago")
    pub timestamp: String,
    pub user: String,
}
