mod context;

pub mod config;
pub mod deals_counts;
pub mod deals_list;
pub mod deals_show;
pub mod leaderboard;
pub mod owners;
pub mod pipeline;

pub use context::HandlerContext;
