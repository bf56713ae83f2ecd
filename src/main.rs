//! Record Sleeve - enriches a record collection catalog from MusicBrainz.
//!
//! Reads a CSV catalog of physical records, replaces title, artist and
//! track list of every record that carries a MusicBrainz release ID, and
//! renders the result as a Markdown or JSON document on stdout.

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod render;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr, stdout carries the rendered document
    let default_level = if args.verbose {
        "record_sleeve=debug"
    } else {
        "record_sleeve=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    cli::run_command(&args)
}
