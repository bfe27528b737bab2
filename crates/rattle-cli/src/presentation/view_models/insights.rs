use serde::Serialize;
use std::fmt;

use crate::presentation::views::{LeaderboardView, OwnerListView, PipelineView};

#[derive(Debug, Serialize)]
pub struct OwnerListViewModel {
    pub owners: Vec<OwnerEntry>,
}

#[derive(Debug, Serialize)]
pub struct OwnerEntry {
    pub name: String,
    pub deal_count: usize,
}

impl fmt::Display for OwnerListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", OwnerListView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct PipelineViewModel {
    pub stages: Vec<StageRow>,
    pub total_deals: usize,
}

#[derive(Debug, Serialize)]
pub struct StageRow {
    pub stage: String,
    pub count: usize,
    pub share_pct: f64,
    pub value: u64,
}

impl fmt::Display for PipelineViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PipelineView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardViewModel {
    pub entries: Vec<LeaderboardEntryViewModel>,
    pub total_owners: usize,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntryViewModel {
    pub rank: usize,
    pub owner: String,
    pub won_value: u64,
    pub won_count: usize,
    pub open_value: u64,
    pub deal_count: usize,
}

impl fmt::Display for LeaderboardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", LeaderboardView::new(self))
    }
}
