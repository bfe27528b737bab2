use crate::presentation::view_models::{
    ActivityViewModel, AppliedFilters, CategoryCountsViewModel, CategoryTab,
    CommandResultViewModel, DealDetailViewModel, DealListViewModel, DealRowViewModel, Guidance,
    PaginationViewModel, StatusBadge, SummaryViewModel,
};
use rattle_engine::{CategoryCounts, DealCategory, DealListPage, ViewState};
use rattle_types::Deal;

/// `configured_page_size` is the session's size before any `--page-size`
/// override; the next-page tip repeats the override when they differ.
pub fn present_deal_list(
    page: &DealListPage,
    configured_page_size: usize,
) -> CommandResultViewModel<DealListViewModel> {
    let view = &page.view;

    let content = DealListViewModel {
        deals: page.deals.iter().map(deal_row).collect(),
        summary: SummaryViewModel {
            count: page.summary.count,
            total_value: page.summary.total_value,
            avg_probability: page.summary.avg_probability,
        },
        pagination: PaginationViewModel {
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            start: page.range.start,
            end: page.range.end,
            total: page.range.total,
        },
        counts: category_tabs(&page.counts, Some(view.category)),
        filters: applied_filters(view),
    };

    let mut result = CommandResultViewModel::new(content);

    if page.is_empty() {
        result = result.with_badge(StatusBadge::info("No deals found"));
        if !view.search.is_empty() {
            result = result.with_suggestion(Guidance::new("Try a broader search term"));
        }
        if result.content.filters.is_narrowed() {
            result = result.with_suggestion(
                Guidance::new("Clear all filters").with_command("rattle deals list"),
            );
        }
        return result;
    }

    let label = if page.summary.count == 1 {
        "1 deal found".to_string()
    } else {
        format!("{} deals found", page.summary.count)
    };
    result = result.with_badge(StatusBadge::success(label));

    if page.page < page.total_pages {
        let page_size = (page.page_size != configured_page_size).then_some(page.page_size);
        result = result.with_suggestion(
            Guidance::new(format!(
                "Showing page {} of {}, see the next page with",
                page.page, page.total_pages
            ))
            .with_command(list_command(
                &view.clone().with_page(page.page + 1),
                page_size,
            )),
        );
    }

    result
}

pub fn present_deal_detail(deal: &Deal) -> CommandResultViewModel<DealDetailViewModel> {
    let content = DealDetailViewModel {
        id: deal.id.clone(),
        name: deal.name.clone(),
        company: deal.company.clone(),
        value: deal.value,
        stage: deal.stage.as_str().to_string(),
        probability: deal.probability,
        owner: deal.owner.clone(),
        expected_close_date: deal.expected_close_date.clone(),
        last_activity: deal.last_activity.clone(),
        contact_person: deal.contact_person.clone(),
        contact_email: deal.contact_email.clone(),
        notes: deal.notes.clone(),
        next_steps: deal.next_steps.clone(),
        recent_activity: deal
            .recent_activity
            .iter()
            .map(|a| ActivityViewModel {
                action: a.action.clone(),
                timestamp: a.timestamp.clone(),
                user: a.user.clone(),
            })
            .collect(),
    };

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("See the rest of this owner's deals")
            .with_command(format!("rattle deals list --owner \"{}\"", deal.owner)),
    )
}

pub fn present_category_counts(
    counts: &CategoryCounts,
    at_risk_threshold: u8,
) -> CommandResultViewModel<CategoryCountsViewModel> {
    let content = CategoryCountsViewModel {
        tabs: category_tabs(counts, None),
        at_risk_threshold,
    };

    let mut result = CommandResultViewModel::new(content);
    if counts.at_risk > 0 {
        result = result.with_suggestion(
            Guidance::new("Review at-risk deals")
                .with_command("rattle deals list --category at-risk --sort probability --direction asc"),
        );
    }
    result
}

fn deal_row(deal: &Deal) -> DealRowViewModel {
    DealRowViewModel {
        id: deal.id.clone(),
        name: deal.name.clone(),
        company: deal.company.clone(),
        value: deal.value,
        stage: deal.stage.as_str().to_string(),
        probability: deal.probability,
        owner: deal.owner.clone(),
    }
}

fn category_tabs(counts: &CategoryCounts, active: Option<DealCategory>) -> Vec<CategoryTab> {
    DealCategory::ALL
        .into_iter()
        .map(|category| CategoryTab {
            category: category.as_str().to_string(),
            count: counts.get(category),
            active: active == Some(category),
        })
        .collect()
}

fn applied_filters(view: &ViewState) -> AppliedFilters {
    AppliedFilters {
        search: non_empty(&view.search),
        owner: non_empty(&view.owner),
        category: view.category.as_str().to_string(),
        sort: view.sort.map(|s| s.key.as_str().to_string()),
        direction: view.sort.map(|s| s.direction.as_str().to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The `rattle deals list` invocation that reproduces `view`.
fn list_command(view: &ViewState, page_size: Option<usize>) -> String {
    let mut cmd = String::from("rattle deals list");

    if !view.search.is_empty() {
        cmd.push_str(&format!(" --search \"{}\"", view.search));
    }
    if !view.owner.is_empty() {
        cmd.push_str(&format!(" --owner \"{}\"", view.owner));
    }
    if view.category != DealCategory::All {
        cmd.push_str(&format!(" --category {}", view.category.as_str()));
    }
    if let Some(sort) = view.sort {
        cmd.push_str(&format!(
            " --sort {} --direction {}",
            sort.key.as_str(),
            sort.direction.as_str()
        ));
    }
    if view.page > 1 {
        cmd.push_str(&format!(" --page {}", view.page));
    }
    if let Some(page_size) = page_size {
        cmd.push_str(&format!(" --page-size {}", page_size));
    }

    cmd
}
