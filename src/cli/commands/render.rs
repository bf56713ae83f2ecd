//! Catalog enrichment and rendering command.

use std::path::Path;

use anyhow::Context;
use chrono::Datelike;
use tokio::runtime::Runtime;

use crate::batch::{BatchDriver, Progress};
use crate::catalog::CatalogReader;
use crate::config::Config;
use crate::enrichment::Enricher;
use crate::render::{self, Document, OutputFormat};

use super::build_client;

/// Enrich every record of `input` and print the rendered document
#[allow(clippy::too_many_arguments)]
pub fn cmd_render(
    rt: &Runtime,
    config: &Config,
    input: &Path,
    format: Option<OutputFormat>,
    keep_going: bool,
    quiet: bool,
    year: Option<i32>,
    contact: Option<&str>,
) -> anyhow::Result<()> {
    let client = build_client(config, contact)?;
    let policy = config.retry.to_policy()?;
    let mut catalog = CatalogReader::open(input)?;

    let progress = if quiet || !config.batch.progress {
        Progress::hidden()
    } else {
        Progress::stderr()
    };
    let keep_going = keep_going || config.batch.keep_going;

    tracing::info!(
        input = %input.display(),
        keep_going,
        "Enriching catalog"
    );

    let report = rt
        .block_on(async {
            BatchDriver::new(Enricher::new(&client, policy), progress)
                .keep_going(keep_going)
                .run(&mut catalog)
                .await
        })
        .with_context(|| format!("Failed to process catalog {:?}", input))?;

    if report.failed > 0 {
        tracing::warn!(
            failed = report.failed,
            "Some records could not be looked up and were kept as in the catalog"
        );
    }

    let doc = Document {
        heading: &config.output.heading,
        year: year.unwrap_or_else(|| chrono::Local::now().year()),
        items: &report.records,
    };
    let output = render::render(&doc, format.unwrap_or(config.output.format))?;

    println!("{}", output);
    Ok(())
}
