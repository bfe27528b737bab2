use crate::config::Config;
use crate::source::DealSource;
use crate::{Error, Result};
use rattle_engine::{CategoryCounts, DealListPage, ListConfig, ViewState};
use rattle_types::Deal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration plus the deal collection for one invocation.
///
/// The collection is loaded once and never mutated; every query is a pure
/// engine call over it.
pub struct Session {
    data_dir: PathBuf,
    config: Config,
    source: DealSource,
    deals: Vec<Deal>,
}

impl Session {
    /// Load `config.toml` from `data_dir` and the deal collection.
    ///
    /// `deals_override` takes precedence over the configured `deals_path`.
    pub fn open(data_dir: PathBuf, deals_override: Option<&Path>) -> Result<Self> {
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)?;

        let source = DealSource::resolve(deals_override, &config, &data_dir);
        debug!(source = %source, "resolved deal source");
        let deals = source.load()?;

        Ok(Self {
            data_dir,
            config,
            source,
            deals,
        })
    }

    pub fn from_parts(config: Config, deals: Vec<Deal>) -> Result<Self> {
        config.validate()?;
        crate::source::validate_deals(&deals)?;
        Ok(Self {
            data_dir: PathBuf::new(),
            config,
            source: DealSource::Demo,
            deals,
        })
    }

    /// Override the configured page size for this session.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::Config("page size must be at least 1".to_string()));
        }
        self.config.list.page_size = page_size;
        Ok(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn list_config(&self) -> &ListConfig {
        &self.config.list
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn source(&self) -> &DealSource {
        &self.source
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn list(&self, view: &ViewState) -> DealListPage {
        rattle_engine::compute_deal_list(&self.deals, view, &self.config.list)
    }

    pub fn counts(&self) -> CategoryCounts {
        rattle_engine::category_counts(&self.deals, &self.config.list)
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        rattle_engine::find_deal(&self.deals, id)
    }
}
