//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use fcase::boundary::Archetype;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fcase-inspect")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Builds OpenFOAM boundary conditions and prints them")]
pub(crate) struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the record an archetype builds from its defaults
    Show {
        /// Archetype name, e.g. 'indoor-wall' (see `list`)
        archetype: Archetype,
        /// Reference velocity of the atmospheric boundary layer (m/s)
        #[arg(long)]
        abl_uref: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List archetype names
    List {},
    /// Load a case file and print every patch
    Case {
        /// Case file (TOML, JSON or YAML)
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
