// main.rs

mod builtins;
mod completion;
mod config;
mod dispatch;
mod error;
mod history;
mod launcher;
mod parser;
mod repl;

use anyhow::{Context, Result};
use env_logger::{Builder as LogBuilder, Env};
use log::debug;

use crate::config::ShellConfig;

fn main() -> Result<()> {
    LogBuilder::from_env(Env::new().filter_or("MSH_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let config = ShellConfig::from_env().context("invalid shell configuration")?;
    debug!("starting with {:?}", config);
    repl::start_repl(&config)
}
