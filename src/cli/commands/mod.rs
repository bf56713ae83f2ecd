//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `render`: Enrich a CSV catalog and print the document
//! - `lookup`: Fetch a single release, for checking an ID
//! - `config`: Show or create the configuration file

mod config;
mod lookup;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

pub use config::cmd_config;
pub use lookup::cmd_lookup;
pub use render::cmd_render;

/// Enrich a record catalog with MusicBrainz data and render it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long = "config", global = true, env = "RECORD_SLEEVE_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a CSV catalog and write the document to stdout
    Render {
        /// CSV file containing the records
        #[arg(short, long, default_value = "records.csv")]
        input: PathBuf,
        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Keep records unenriched when their lookup fails instead of stopping
        #[arg(long)]
        keep_going: bool,
        /// Don't show the progress line
        #[arg(short, long)]
        quiet: bool,
        /// Year printed in the document (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Contact sent to MusicBrainz in the User-Agent
        #[arg(long, env = "MUSICBRAINZ_CONTACT")]
        contact: Option<String>,
    },
    /// Look up one release and print what enrichment would use
    Lookup {
        /// MusicBrainz release ID
        release_id: String,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = crate::config::load(cli.config_file.as_deref())?;

    // Lookups are strictly sequential, a single-threaded runtime is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Commands::Render {
            input,
            format,
            keep_going,
            quiet,
            year,
            contact,
        } => cmd_render(
            &rt,
            &config,
            input,
            *format,
            *keep_going,
            *quiet,
            *year,
            contact.as_deref(),
        ),
        Commands::Lookup { release_id } => cmd_lookup(&rt, &config, release_id),
        Commands::Config { init } => cmd_config(&config, cli.config_file.as_deref(), *init),
    }
}

/// Build the MusicBrainz client, applying a command-line contact override.
pub(crate) fn build_client(
    config: &crate::config::Config,
    contact: Option<&str>,
) -> anyhow::Result<crate::enrichment::MusicBrainzClient> {
    let mut mb_config = config.musicbrainz.clone();
    if let Some(contact) = contact {
        mb_config.contact = contact.to_string();
    }
    Ok(crate::enrichment::MusicBrainzClient::new(&mb_config)?)
}
