use serde::Serialize;
use std::fmt;

use crate::presentation::views::{CategoryCountsView, DealDetailView, DealListView};

// --------------------------------------------------------
// Deal List
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DealListViewModel {
    pub deals: Vec<DealRowViewModel>,
    pub summary: SummaryViewModel,
    pub pagination: PaginationViewModel,
    /// Tab counts over the whole collection
    pub counts: Vec<CategoryTab>,
    pub filters: AppliedFilters,
}

#[derive(Debug, Serialize)]
pub struct DealRowViewModel {
    pub id: String,
    pub name: String,
    pub company: String,
    pub value: u64,
    /// Raw stage token, e.g. `closed-won`
    pub stage: String,
    pub probability: u8,
    pub owner: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub count: usize,
    pub total_value: u64,
    pub avg_probability: f64,
}

#[derive(Debug, Serialize)]
pub struct PaginationViewModel {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// 1-indexed first row shown; 0 when the page is empty
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryTab {
    pub category: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl AppliedFilters {
    pub fn is_narrowed(&self) -> bool {
        self.search.is_some() || self.owner.is_some() || self.category != "all"
    }
}

impl fmt::Display for DealListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DealListView::new(self))
    }
}

// --------------------------------------------------------
// Deal Detail
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DealDetailViewModel {
    pub id: String,
    pub name: String,
    pub company: String,
    pub value: u64,
    pub stage: String,
    pub probability: u8,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub next_steps: Vec<String>,
    pub recent_activity: Vec<ActivityViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ActivityViewModel {
    pub action: String,
    pub timestamp: String,
    pub user: String,
}

impl fmt::Display for DealDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DealDetailView::new(self))
    }
}

// --------------------------------------------------------
// Category Counts
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CategoryCountsViewModel {
    pub tabs: Vec<CategoryTab>,
    pub at_risk_threshold: u8,
}

impl fmt::Display for CategoryCountsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CategoryCountsView::new(self))
    }
}
