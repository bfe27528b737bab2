pub mod common;
pub mod config;
pub mod deal;
pub mod insights;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use deal::{
    ActivityViewModel, AppliedFilters, CategoryCountsViewModel, CategoryTab, DealDetailViewModel,
    DealListViewModel, DealRowViewModel, PaginationViewModel, SummaryViewModel,
};
pub use insights::{
    LeaderboardEntryViewModel, LeaderboardViewModel, OwnerEntry, OwnerListViewModel,
    PipelineViewModel, StageRow,
};
pub use result::CommandResultViewModel;
