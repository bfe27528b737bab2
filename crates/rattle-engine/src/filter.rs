use std::cmp::Ordering;

use rattle_types::Deal;

use crate::view_state::{ListConfig, SortConfig, SortDirection, SortKey, ViewState};

/// Case-insensitive substring match over name and company. An empty query matches everything.
pub fn matches_search(deal: &Deal, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    deal.name.to_lowercase().contains(&query) || deal.company.to_lowercase().contains(&query)
}

/// Exact owner match. An empty owner matches everything.
pub fn matches_owner(deal: &Deal, owner: &str) -> bool {
    owner.is_empty() || deal.owner == owner
}

/// Derive the ordered list of deals for the current view state.
///
/// Runs search, owner and category filters, then the optional sort. The
/// result borrows from `deals`; paging is left to [`crate::paginate`].
pub fn compute_filtered_deals<'a>(
    deals: &'a [Deal],
    view: &ViewState,
    config: &ListConfig,
) -> Vec<&'a Deal> {
    let mut filtered: Vec<&Deal> = deals
        .iter()
        .filter(|deal| matches_search(deal, &view.search))
        .filter(|deal| matches_owner(deal, &view.owner))
        .filter(|deal| view.category.matches(deal, config.at_risk_threshold))
        .collect();

    if let Some(sort) = view.sort {
        sort_deals(&mut filtered, sort);
    }

    filtered
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_deals(deals: &mut [&Deal], sort: SortConfig) {
    deals.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &Deal, b: &Deal, key: SortKey) -> Ordering {
    match key {
        SortKey::Value => a.value.cmp(&b.value),
        SortKey::Probability => a.probability.cmp(&b.probability),
        // Raw token order, not pipeline order
        SortKey::Stage => a.stage.as_str().cmp(b.stage.as_str()),
    }
}
