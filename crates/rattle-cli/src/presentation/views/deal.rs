use std::fmt;

use crate::presentation::formatters::{
    category_label, format_currency, format_percent, stage_label, style, truncate,
};
use crate::presentation::view_models::{
    CategoryCountsViewModel, CategoryTab, DealDetailViewModel, DealListViewModel,
};

// --------------------------------------------------------
// Deal List View
// --------------------------------------------------------

pub struct DealListView<'a> {
    data: &'a DealListViewModel,
}

impl<'a> DealListView<'a> {
    pub fn new(data: &'a DealListViewModel) -> Self {
        Self { data }
    }

    fn render_tabs(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_tabs(f, &self.data.counts)?;
        writeln!(f)
    }

    fn render_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = &self.data.filters;
        let mut parts = Vec::new();

        if let Some(search) = &filters.search {
            parts.push(format!("search \"{}\"", search));
        }
        if let Some(owner) = &filters.owner {
            parts.push(format!("owner {}", owner));
        }
        if let Some(sort) = &filters.sort {
            let direction = filters.direction.as_deref().unwrap_or("desc");
            parts.push(format!("sorted by {} {}", sort, direction));
        }

        if !parts.is_empty() {
            writeln!(f, "Filters: {}", parts.join(" | "))?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<4} {:<24} {:<20} {:>10}  {:<14} {:>5}  OWNER",
            "ID", "DEAL", "COMPANY", "VALUE", "STAGE", "PROB"
        )?;
        writeln!(f, "{}", "-".repeat(96))?;

        for deal in &self.data.deals {
            let stage = format!("{:<14}", stage_label(&deal.stage));
            writeln!(
                f,
                "{:<4} {:<24} {:<20} {:>10}  {} {:>5}  {}",
                deal.id,
                truncate(&deal.name, 24),
                truncate(&deal.company, 20),
                format_currency(deal.value),
                style::stage_cell(&stage, &deal.stage),
                format!("{}%", deal.probability),
                deal.owner
            )?;
        }
        Ok(())
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pagination = &self.data.pagination;
        let summary = &self.data.summary;

        writeln!(
            f,
            "Showing {} to {} of {} results (page {} of {})",
            pagination.start,
            pagination.end,
            pagination.total,
            pagination.page,
            pagination.total_pages
        )?;
        writeln!(
            f,
            "Total: {} deals | Value: {} | Avg probability: {}",
            summary.count,
            format_currency(summary.total_value),
            format_percent(summary.avg_probability)
        )
    }
}

impl<'a> fmt::Display for DealListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_tabs(f)?;
        self.render_filters(f)?;
        writeln!(f)?;

        if self.data.summary.count == 0 {
            writeln!(f, "No deals match the current filters.")?;
            return Ok(());
        }

        if self.data.deals.is_empty() {
            writeln!(f, "No deals on page {}.", self.data.pagination.page)?;
            return Ok(());
        }

        self.render_table(f)?;
        writeln!(f)?;
        self.render_footer(f)
    }
}

fn write_tabs(f: &mut fmt::Formatter, tabs: &[CategoryTab]) -> fmt::Result {
    let rendered: Vec<String> = tabs
        .iter()
        .map(|tab| {
            let label = format!("{} ({})", category_label(&tab.category), tab.count);
            if tab.active {
                style::bold(&format!("[{}]", label))
            } else {
                label
            }
        })
        .collect();
    write!(f, "{}", rendered.join("  "))
}

// --------------------------------------------------------
// Deal Detail View
// --------------------------------------------------------

pub struct DealDetailView<'a> {
    data: &'a DealDetailViewModel,
}

impl<'a> DealDetailView<'a> {
    pub fn new(data: &'a DealDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DealDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let deal = self.data;

        writeln!(f, "{} (#{})", style::bold(&deal.name), deal.id)?;
        writeln!(f, "{}", deal.company)?;
        writeln!(f)?;

        let label = stage_label(&deal.stage);
        writeln!(f, "  Stage:          {}", style::stage_cell(&label, &deal.stage))?;
        writeln!(f, "  Value:          {}", format_currency(deal.value))?;
        writeln!(f, "  Probability:    {}%", deal.probability)?;
        writeln!(f, "  Owner:          {}", deal.owner)?;
        if let Some(date) = &deal.expected_close_date {
            writeln!(f, "  Expected close: {}", date)?;
        }
        if let Some(last) = &deal.last_activity {
            writeln!(f, "  Last activity:  {}", last)?;
        }

        match (&deal.contact_person, &deal.contact_email) {
            (Some(person), Some(email)) => {
                writeln!(f, "\nContact")?;
                writeln!(f, "  {} <{}>", person, email)?;
            }
            (Some(person), None) => {
                writeln!(f, "\nContact")?;
                writeln!(f, "  {}", person)?;
            }
            (None, Some(email)) => {
                writeln!(f, "\nContact")?;
                writeln!(f, "  {}", email)?;
            }
            (None, None) => {}
        }

        if let Some(notes) = &deal.notes {
            writeln!(f, "\nNotes")?;
            writeln!(f, "  {}", notes)?;
        }

        if !deal.next_steps.is_empty() {
            writeln!(f, "\nNext steps")?;
            for (i, step) in deal.next_steps.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        if !deal.recent_activity.is_empty() {
            writeln!(f, "\nRecent activity")?;
            for activity in &deal.recent_activity {
                writeln!(
                    f,
                    "  • {} ({}, {})",
                    activity.action, activity.timestamp, activity.user
                )?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Category Counts View
// --------------------------------------------------------

pub struct CategoryCountsView<'a> {
    data: &'a CategoryCountsViewModel,
}

impl<'a> CategoryCountsView<'a> {
    pub fn new(data: &'a CategoryCountsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CategoryCountsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tab in &self.data.tabs {
            writeln!(f, "{:<10} {:>5}", category_label(&tab.category), tab.count)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "At risk: open deals below {}% probability",
            self.data.at_risk_threshold
        )
    }
}
