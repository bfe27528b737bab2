mod config;
mod deal;
mod insights;

pub use config::{ConfigInitView, ConfigView};
pub use deal::{CategoryCountsView, DealDetailView, DealListView};
pub use insights::{LeaderboardView, OwnerListView, PipelineView};
