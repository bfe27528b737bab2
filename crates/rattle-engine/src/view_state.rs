use rattle_types::Deal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_AT_RISK_THRESHOLD: u8 = 40;

/// Session-wide list settings. Fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Open deals with a probability strictly below this value are at risk.
    #[serde(default = "default_at_risk_threshold")]
    pub at_risk_threshold: u8,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_at_risk_threshold() -> u8 {
    DEFAULT_AT_RISK_THRESHOLD
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            at_risk_threshold: DEFAULT_AT_RISK_THRESHOLD,
        }
    }
}

/// Tab filter over the deal list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealCategory {
    #[default]
    All,
    Open,
    AtRisk,
    Won,
    Lost,
}

impl DealCategory {
    pub const ALL: [DealCategory; 5] = [
        DealCategory::All,
        DealCategory::Open,
        DealCategory::AtRisk,
        DealCategory::Won,
        DealCategory::Lost,
    ];

    pub fn matches(&self, deal: &Deal, at_risk_threshold: u8) -> bool {
        match self {
            DealCategory::All => true,
            DealCategory::Open => deal.is_open(),
            DealCategory::AtRisk => deal.is_open() && deal.probability < at_risk_threshold,
            DealCategory::Won => deal.is_won(),
            DealCategory::Lost => deal.is_lost(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealCategory::All => "all",
            DealCategory::Open => "open",
            DealCategory::AtRisk => "at-risk",
            DealCategory::Won => "won",
            DealCategory::Lost => "lost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Value,
    Probability,
    Stage,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Value => "value",
            SortKey::Probability => "probability",
            SortKey::Stage => "stage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// The user's current list selections.
///
/// A `ViewState` is a value: transitions return a new state instead of
/// mutating in place, so a render never observes a half-applied update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Case-insensitive substring over name and company. Empty means no filter.
    pub search: String,
    /// Exact owner match. Empty means all owners.
    pub owner: String,
    pub category: DealCategory,
    pub sort: Option<SortConfig>,
    /// 1-indexed
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            owner: String::new(),
            category: DealCategory::All,
            sort: None,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_owner(self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_category(self, category: DealCategory) -> Self {
        Self {
            category,
            page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort: Option<SortConfig>) -> Self {
        Self { sort, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Column-header click: the same key flips direction, a new key starts descending.
    pub fn toggle_sort(self, key: SortKey) -> Self {
        let sort = match self.sort {
            Some(current) if current.key == key => {
                SortConfig::new(key, current.direction.flipped())
            }
            _ => SortConfig::new(key, SortDirection::Desc),
        };
        Self {
            sort: Some(sort),
            ..self
        }
    }
}
