use crate::{Config, Error, Result};
use rattle_types::Deal;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DEMO_DEALS: &str = include_str!("../data/demo_deals.json");

/// Where the session's deal collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealSource {
    /// Bundled 20-deal dataset
    Demo,
    /// JSON array of deals on disk
    File(PathBuf),
}

impl DealSource {
    /// Explicit path, then `data.deals_path` from config, then the demo dataset.
    ///
    /// A relative `deals_path` in config is taken relative to the workspace.
    pub fn resolve(explicit: Option<&Path>, config: &Config, workspace: &Path) -> Self {
        if let Some(path) = explicit {
            return DealSource::File(path.to_path_buf());
        }

        match &config.data.deals_path {
            Some(path) if path.is_relative() => DealSource::File(workspace.join(path)),
            Some(path) => DealSource::File(path.clone()),
            None => DealSource::Demo,
        }
    }

    pub fn load(&self) -> Result<Vec<Deal>> {
        let deals = match self {
            DealSource::Demo => demo_deals()?,
            DealSource::File(path) => load_deals_from(path)?,
        };
        validate_deals(&deals)?;
        debug!(source = %self, count = deals.len(), "loaded deals");
        Ok(deals)
    }
}

impl fmt::Display for DealSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealSource::Demo => write!(f, "demo dataset"),
            DealSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn demo_deals() -> Result<Vec<Deal>> {
    Ok(serde_json::from_str(DEMO_DEALS)?)
}

pub fn load_deals_from(path: &Path) -> Result<Vec<Deal>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Reject duplicate ids. Probabilities above 100 are only logged.
pub fn validate_deals(deals: &[Deal]) -> Result<()> {
    let mut seen = HashSet::with_capacity(deals.len());
    for deal in deals {
        if !seen.insert(deal.id.as_str()) {
            return Err(Error::InvalidData(format!("duplicate deal id '{}'", deal.id)));
        }
        if deal.probability > 100 {
            warn!(
                deal_id = %deal.id,
                probability = deal.probability,
                "deal probability is above 100"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rattle_engine::{ListConfig, ViewState, category_counts, compute_deal_list, owner_options};
    use rattle_testing::{DealBuilder, sample_pipeline};
    use rattle_testing::fixtures::write_deals_file;
    use tempfile::TempDir;

    #[test]
    fn test_demo_dataset_shape() -> Result<()> {
        let deals = demo_deals()?;
        assert_eq!(deals.len(), 20);
        assert_eq!(deals.iter().map(|d| d.value).sum::<u64>(), 2_037_000);

        let counts = category_counts(&deals, &ListConfig::default());
        assert_eq!(counts.open, 19);
        assert_eq!(counts.won, 1);
        assert_eq!(counts.lost, 0);
        assert_eq!(counts.at_risk, 3);

        assert_eq!(
            owner_options(&deals),
            vec!["David Kim", "Emily Rodriguez", "Mike Chen", "Sarah Johnson"]
        );
        Ok(())
    }

    #[test]
    fn test_demo_dataset_search_and_paging() -> Result<()> {
        let deals = demo_deals()?;
        let config = ListConfig::default();

        let page = compute_deal_list(&deals, &ViewState::new(), &config);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.summary.avg_probability, 61.25);

        let page = compute_deal_list(&deals, &ViewState::new().with_search("enterprise"), &config);
        let ids: Vec<&str> = page.deals.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "8", "13", "17"]);
        Ok(())
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let mut config = Config::default();
        config.data.deals_path = Some(PathBuf::from("/srv/from-config.json"));
        let workspace = Path::new("/ws");

        assert_eq!(
            DealSource::resolve(Some(Path::new("/tmp/cli.json")), &config, workspace),
            DealSource::File(PathBuf::from("/tmp/cli.json"))
        );
        assert_eq!(
            DealSource::resolve(None, &config, workspace),
            DealSource::File(PathBuf::from("/srv/from-config.json"))
        );
        assert_eq!(
            DealSource::resolve(None, &Config::default(), workspace),
            DealSource::Demo
        );
    }

    #[test]
    fn test_relative_config_path_is_workspace_relative() {
        let mut config = Config::default();
        config.data.deals_path = Some(PathBuf::from("deals.json"));

        assert_eq!(
            DealSource::resolve(None, &config, Path::new("/ws")),
            DealSource::File(PathBuf::from("/ws/deals.json"))
        );
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("deals.json");
        write_deals_file(&path, &sample_pipeline()).expect("write deals file");

        let deals = DealSource::File(path).load()?;
        assert_eq!(deals, sample_pipeline());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DealSource::File(PathBuf::from("/nonexistent/deals.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("/nonexistent/deals.json"));
    }

    #[test]
    fn test_malformed_file_is_json_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("deals.json");
        std::fs::write(&path, "[{\"id\": \"1\"")?;

        assert!(matches!(DealSource::File(path).load(), Err(Error::Json(_))));
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let deals = vec![DealBuilder::new("7").build(), DealBuilder::new("7").build()];
        let err = validate_deals(&deals).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("'7'"));
    }

    #[test]
    fn test_probability_above_100_is_accepted() {
        let deals = vec![DealBuilder::new("1").probability(120).build()];
        assert!(validate_deals(&deals).is_ok());
    }
}
