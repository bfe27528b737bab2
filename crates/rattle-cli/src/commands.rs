use super::args::{Cli, Commands, ConfigCommand, DealsCommand};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use rattle_runtime::{Session, resolve_workspace_path};
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    logging::setup_tracing(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(cli.format);
    let deals = cli.deals.as_deref();

    match cli.command {
        Commands::Deals { command } => match command {
            DealsCommand::List {
                search,
                owner,
                category,
                sort,
                direction,
                page,
                page_size,
            } => {
                let session = open_session(data_dir, deals)?;
                handlers::deals_list::handle(
                    session,
                    handlers::deals_list::ListOptions {
                        search,
                        owner,
                        category,
                        sort,
                        direction,
                        page,
                        page_size,
                    },
                    &ctx,
                )
            }
            DealsCommand::Show { id } => {
                let session = open_session(data_dir, deals)?;
                handlers::deals_show::handle(&session, &id, &ctx)
            }
            DealsCommand::Counts => {
                let session = open_session(data_dir, deals)?;
                handlers::deals_counts::handle(&session, &ctx)
            }
        },

        Commands::Owners => {
            let session = open_session(data_dir, deals)?;
            handlers::owners::handle(&session, &ctx)
        }

        Commands::Pipeline => {
            let session = open_session(data_dir, deals)?;
            handlers::pipeline::handle(&session, &ctx)
        }

        Commands::Leaderboard { limit } => {
            let session = open_session(data_dir, deals)?;
            handlers::leaderboard::handle(&session, limit, &ctx)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&data_dir, deals, &ctx),
            ConfigCommand::Init { force } => handlers::config::init(&data_dir, force, &ctx),
        },
    }
}

fn open_session(data_dir: PathBuf, deals: Option<&Path>) -> Result<Session> {
    Ok(Session::open(data_dir, deals)?)
}
