//! Output document rendering.
//!
//! Turns the ordered list of records into the final document, either a
//! Markdown catalog meant for printing or a JSON dump for other tools.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Record;

/// Document format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Everything the renderer needs.
#[derive(Debug, Serialize)]
pub struct Document<'a> {
    #[serde(skip)]
    pub heading: &'a str,
    pub year: i32,
    pub items: &'a [Record],
}

/// Render `doc` in the requested format.
pub fn render(doc: &Document<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => render_markdown(doc),
        OutputFormat::Json => {
            serde_json::to_string_pretty(doc).map_err(|e| Error::render(e.to_string()))
        }
    }
}

fn render_markdown(doc: &Document<'_>) -> Result<String> {
    write_markdown(doc).map_err(|e| Error::render(e.to_string()))
}

fn write_markdown(doc: &Document<'_>) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# {}", doc.heading)?;

    for record in doc.items {
        writeln!(out)?;
        writeln!(
            out,
            "## {}. {} — {}",
            record.position,
            escape(&record.artist),
            escape(&record.title)
        )?;

        if !record.flight_case.is_empty() {
            writeln!(out)?;
            writeln!(out, "Flight case: {}", escape(&record.flight_case))?;
        }

        if !record.tracks.is_empty() {
            writeln!(out)?;
            writeln!(out, "| # | Title |")?;
            writeln!(out, "|---|-------|")?;
            for track in &record.tracks {
                writeln!(out, "| {} | {} |", escape(&track.number), escape(&track.title))?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    write!(out, "{} records, catalogued {}", doc.items.len(), doc.year)?;

    Ok(out)
}

/// Keep catalog text from breaking table cells or lines
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
