use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use rattle_runtime::{Config, DealSource};
use std::path::Path;

pub fn present_config(
    path: &Path,
    exists: bool,
    config: &Config,
    source: &DealSource,
) -> CommandResultViewModel<ConfigViewModel> {
    let deals_source = match source {
        DealSource::Demo => "demo".to_string(),
        DealSource::File(path) => path.display().to_string(),
    };

    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        page_size: config.list.page_size,
        at_risk_threshold: config.list.at_risk_threshold,
        deals_source,
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result.with_suggestion(
            Guidance::new("Write a config file to customise these values")
                .with_command("rattle config init"),
        );
    }
    result
}

pub fn present_config_init(
    path: &Path,
    created: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        created,
    };

    if created {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Config created"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults").with_command("rattle config init --force"),
            )
    }
}
