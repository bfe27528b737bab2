pub mod config;
pub mod error;
pub mod session;
pub mod source;

pub use config::{Config, DataConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use session::Session;
pub use source::{DealSource, demo_deals, load_deals_from, validate_deals};
