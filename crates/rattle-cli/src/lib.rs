// rattle: a terminal front-end for the deal list view-model.
//
// Every invocation is one render of the list: flags become a ViewState,
// the engine derives the page, and the presentation layer prints it.
// Nothing is persisted between invocations except config.toml.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, DealsCommand};
pub use commands::run;
