//! Dashboard side panels derived from the full deal collection: owner
//! drop-down options, pipeline stage distribution and the owner leaderboard.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use rattle_types::{Deal, DealStage};
use serde::Serialize;

use crate::iter_deals;

/// Distinct owners, sorted ascending.
pub fn owner_options<D: Borrow<Deal>>(deals: &[D]) -> Vec<String> {
    iter_deals(deals)
        .map(|d| d.owner.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerCount {
    pub owner: String,
    pub deal_count: usize,
}

/// Deals per owner, in the same order as [`owner_options`].
pub fn owner_counts<D: Borrow<Deal>>(deals: &[D]) -> Vec<OwnerCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for deal in iter_deals(deals) {
        *counts.entry(deal.owner.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(owner, deal_count)| OwnerCount {
            owner: owner.to_string(),
            deal_count,
        })
        .collect()
}

pub fn find_deal<'a>(deals: &'a [Deal], id: &str) -> Option<&'a Deal> {
    deals.iter().find(|d| d.id == id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageCount {
    pub stage: DealStage,
    pub count: usize,
    /// Percentage of all deals, 0-100.
    pub share_pct: f64,
    /// Summed deal value, saturating at `u64::MAX`.
    pub value: u64,
}

/// One entry per stage in pipeline order, zero counts included.
pub fn stage_distribution<D: Borrow<Deal>>(deals: &[D]) -> Vec<StageCount> {
    let mut counts = [(0usize, 0u64); DealStage::ALL.len()];
    for deal in iter_deals(deals) {
        let (count, value) = &mut counts[deal.stage.pipeline_index()];
        *count += 1;
        *value = value.saturating_add(deal.value);
    }

    let total = deals.len();
    DealStage::ALL
        .into_iter()
        .zip(counts)
        .map(|(stage, (count, value))| StageCount {
            stage,
            count,
            share_pct: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
            value,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub owner: String,
    /// Total value of closed-won deals.
    pub won_value: u64,
    pub won_count: usize,
    /// Total value of deals still in the pipeline.
    pub open_value: u64,
    pub deal_count: usize,
}

/// Owners ranked by won value, then open value, then name.
pub fn leaderboard<D: Borrow<Deal>>(deals: &[D]) -> Vec<LeaderboardEntry> {
    let mut by_owner: BTreeMap<&str, LeaderboardEntry> = BTreeMap::new();

    for deal in iter_deals(deals) {
        let entry = by_owner
            .entry(deal.owner.as_str())
            .or_insert_with(|| LeaderboardEntry {
                owner: deal.owner.clone(),
                won_value: 0,
                won_count: 0,
                open_value: 0,
                deal_count: 0,
            });

        entry.deal_count += 1;
        if deal.is_won() {
            entry.won_value = entry.won_value.saturating_add(deal.value);
            entry.won_count += 1;
        } else if deal.is_open() {
            entry.open_value = entry.open_value.saturating_add(deal.value);
        }
    }

    let mut entries: Vec<LeaderboardEntry> = by_owner.into_values().collect();
    entries.sort_by(|a, b| {
        b.won_value
            .cmp(&a.won_value)
            .then_with(|| b.open_value.cmp(&a.open_value))
            .then_with(|| a.owner.cmp(&b.owner))
    });
    entries
}
