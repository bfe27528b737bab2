use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rattle_runtime::{Config, DealSource};
use std::path::Path;
use tracing::info;

pub fn show(data_dir: &Path, deals: Option<&Path>, ctx: &HandlerContext) -> Result<()> {
    let config_path = Config::path_in(data_dir);
    let exists = config_path.exists();
    let config = Config::load_from(&config_path)?;
    let source = DealSource::resolve(deals, &config, data_dir);

    ctx.render(presenters::present_config(&config_path, exists, &config, &source))
}

pub fn init(data_dir: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    if config_path.exists() && !force {
        return ctx.render(presenters::present_config_init(&config_path, false));
    }

    Config::default().save_to(&config_path)?;
    info!(path = %config_path.display(), "wrote default config");
    ctx.render(presenters::present_config_init(&config_path, true))
}
