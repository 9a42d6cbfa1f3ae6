#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use fcase::domain::config::LoggingConfig;
use fcase::prelude::CaseFile;
use fcase_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The case file carries its own logging section, so it is read before the logger starts.
    let case = match &cli.command {
        Command::Case { file, .. } => Some(
            CaseFile::load(file).with_context(|| format!("Failed to load case {}", file.display()))?,
        ),
        _ => None,
    };
    let logging = case.as_ref().map(|case| case.config.logging.clone()).unwrap_or_default();
    let _log = init_logger(&logging, cli.verbose)?;

    match cli.command {
        Command::Show { archetype, abl_uref, json } => handlers::show(archetype, abl_uref, json)?,
        Command::List {} => handlers::list(),
        Command::Case { json, .. } => {
            let case = case.context("Case file was not loaded")?;
            handlers::case(&case, json)?;
        },
    }

    Ok(())
}

fn init_logger(config: &LoggingConfig, verbose: bool) -> Result<Logger> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        config.level.parse().with_context(|| format!("Invalid log level '{}'", config.level))?
    };

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(dir) = &config.dir {
        builder = builder.file(dir);
        #[cfg(feature = "json-logs")]
        if config.json {
            builder = builder.json();
        }
    }

    Ok(builder.init()?)
}
