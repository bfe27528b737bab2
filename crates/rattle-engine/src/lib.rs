// Engine module - the deal list view-model.
// Everything here is a pure function of (deals, view state, list config);
// nothing is cached between calls.

pub mod filter;
pub mod insights;
pub mod pagination;
pub mod summary;
pub mod view_state;

use std::borrow::Borrow;

pub use filter::{compute_filtered_deals, matches_owner, matches_search, sort_deals};
pub use insights::{
    LeaderboardEntry, OwnerCount, StageCount, find_deal, leaderboard, owner_counts, owner_options,
    stage_distribution,
};
pub use pagination::{PageRange, clamp_page, page_range, paginate, total_pages};
pub use summary::{CategoryCounts, TableSummary, category_counts, summarize};
pub use view_state::{
    DEFAULT_AT_RISK_THRESHOLD, DEFAULT_PAGE_SIZE, DealCategory, ListConfig, SortConfig,
    SortDirection, SortKey, ViewState,
};

use rattle_types::Deal;
use serde::Serialize;

/// Everything the list view renders for one view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealListPage {
    pub view: ViewState,
    pub deals: Vec<Deal>,
    /// Summary over the whole filtered list, not just this page.
    pub summary: TableSummary,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub range: PageRange,
    /// Counts over the unfiltered collection.
    pub counts: CategoryCounts,
}

impl DealListPage {
    pub fn is_empty(&self) -> bool {
        self.summary.count == 0
    }
}

// Façade API - Stable public interface for the CLI layer

/// Filter, sort and slice `deals` for `view`.
///
/// `view.page` is used as given; an out-of-range page produces an empty
/// `deals` list rather than an error.
pub fn compute_deal_list(deals: &[Deal], view: &ViewState, config: &ListConfig) -> DealListPage {
    let filtered = compute_filtered_deals(deals, view, config);
    let page_deals = paginate(&filtered, view.page, config.page_size)
        .iter()
        .map(|d| (*d).clone())
        .collect();

    DealListPage {
        view: view.clone(),
        deals: page_deals,
        summary: summarize(&filtered),
        page: view.page,
        page_size: config.page_size,
        total_pages: total_pages(filtered.len(), config.page_size),
        range: page_range(view.page, config.page_size, filtered.len()),
        counts: category_counts(deals, config),
    }
}

pub(crate) fn iter_deals<D: Borrow<Deal>>(deals: &[D]) -> impl Iterator<Item = &Deal> {
    deals.iter().map(|d| d.borrow())
}
