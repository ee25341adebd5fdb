//! # colstats entry point
//!
//! ```bash
//! colstats analyze posts.csv ads.csv
//! colstats analyze --config datasets.json --format json
//! colstats columns posts.csv --loader polars
//! ```
//!
//! Reports are printed to stdout; logs go to stderr and a rolling file.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    colstats::logging::init(cli.verbose)?;

    cli::run_command(cli.command).inspect_err(|err| {
        tracing::error!("{err:#}");
    })
}
