use std::fmt;

use crate::presentation::formatters::{format_currency, stage_label, style};
use crate::presentation::view_models::{
    LeaderboardViewModel, OwnerListViewModel, PipelineViewModel,
};

pub struct OwnerListView<'a> {
    data: &'a OwnerListViewModel,
}

impl<'a> OwnerListView<'a> {
    pub fn new(data: &'a OwnerListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for OwnerListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.owners.is_empty() {
            writeln!(f, "No owners found.")?;
            return Ok(());
        }

        for owner in &self.data.owners {
            writeln!(f, "{:<24} {:>3} deals", owner.name, owner.deal_count)?;
        }
        Ok(())
    }
}

pub struct PipelineView<'a> {
    data: &'a PipelineViewModel,
}

impl<'a> PipelineView<'a> {
    pub fn new(data: &'a PipelineViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PipelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<14} {:>5} {:>7} {:>12}",
            "STAGE", "DEALS", "SHARE", "VALUE"
        )?;
        writeln!(f, "{}", "-".repeat(41))?;

        for row in &self.data.stages {
            let stage = format!("{:<14}", stage_label(&row.stage));
            writeln!(
                f,
                "{} {:>5} {:>6.1}% {:>12}",
                style::stage_cell(&stage, &row.stage),
                row.count,
                row.share_pct,
                format_currency(row.value)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{} deals in total", self.data.total_deals)
    }
}

pub struct LeaderboardView<'a> {
    data: &'a LeaderboardViewModel,
}

impl<'a> LeaderboardView<'a> {
    pub fn new(data: &'a LeaderboardViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LeaderboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.entries.is_empty() {
            writeln!(f, "No owners to rank.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:>2}  {:<20} {:>12} {:>4} {:>12} {:>6}",
            "#", "OWNER", "WON", "WINS", "OPEN", "DEALS"
        )?;
        writeln!(f, "{}", "-".repeat(62))?;

        for entry in &self.data.entries {
            writeln!(
                f,
                "{:>2}  {:<20} {:>12} {:>4} {:>12} {:>6}",
                entry.rank,
                entry.owner,
                format_currency(entry.won_value),
                entry.won_count,
                format_currency(entry.open_value),
                entry.deal_count
            )?;
        }
        Ok(())
    }
}
