use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::{CategoryArg, DirectionArg, SortKeyArg};
use anyhow::Result;
use rattle_engine::{DealListPage, SortConfig, SortDirection, ViewState, clamp_page};
use rattle_runtime::Session;
use tracing::debug;

pub struct ListOptions {
    pub search: Option<String>,
    pub owner: Option<String>,
    pub category: CategoryArg,
    pub sort: Option<SortKeyArg>,
    pub direction: Option<DirectionArg>,
    pub page: usize,
    pub page_size: Option<usize>,
}

pub fn handle(session: Session, options: ListOptions, ctx: &HandlerContext) -> Result<()> {
    let configured_page_size = session.list_config().page_size;
    let session = match options.page_size {
        Some(page_size) => session.with_page_size(page_size)?,
        None => session,
    };

    let list = clamped_list(&session, &view_state(options));
    ctx.render(presenters::present_deal_list(&list, configured_page_size))
}

/// Compute the list, moving an out-of-range page onto the nearest valid one.
fn clamped_list(session: &Session, view: &ViewState) -> DealListPage {
    let list = session.list(view);
    let page = clamp_page(view.page, list.total_pages);
    if page == view.page {
        return list;
    }

    debug!(requested = view.page, page, "page out of range, clamped");
    session.list(&view.clone().with_page(page))
}

fn view_state(options: ListOptions) -> ViewState {
    let sort = options.sort.map(|key| {
        let direction = options
            .direction
            .map(SortDirection::from)
            .unwrap_or(SortDirection::Desc);
        SortConfig::new(key.into(), direction)
    });

    ViewState::new()
        .with_search(options.search.unwrap_or_default())
        .with_owner(options.owner.unwrap_or_default())
        .with_category(options.category.into())
        .with_sort(sort)
        .with_page(options.page)
}
