mod config;
mod deal;
mod insights;

pub use config::{present_config, present_config_init};
pub use deal::{present_category_counts, present_deal_detail, present_deal_list};
pub use insights::{present_leaderboard, present_owners, present_pipeline};
