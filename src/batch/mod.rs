//! Batch driver - runs a whole catalog through the enricher.
//!
//! Rows are processed strictly one at a time in file order: read, build
//! the record, show progress, enrich, append. By default the first error
//! of any kind stops the run and nothing is returned. With `keep_going`,
//! a failed lookup is logged and its record is kept unenriched; malformed
//! rows still stop the run.

mod progress;

pub use progress::Progress;

use std::io::Read;

use crate::catalog::CatalogReader;
use crate::enrichment::{EnrichOutcome, Enricher, MusicBrainzApi};
use crate::error::Result;
use crate::model::Record;

/// Result of a completed batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// All records, in catalog order
    pub records: Vec<Record>,
    /// Records whose data was replaced from MusicBrainz
    pub enriched: usize,
    /// Records without a release ID
    pub skipped: usize,
    /// Records whose release had no media
    pub no_media: usize,
    /// Records whose lookup failed (only with `keep_going`)
    pub failed: usize,
}

/// Sequences a catalog run.
pub struct BatchDriver<'a, C: MusicBrainzApi> {
    enricher: Enricher<'a, C>,
    progress: Progress,
    keep_going: bool,
}

impl<'a, C: MusicBrainzApi> BatchDriver<'a, C> {
    pub fn new(enricher: Enricher<'a, C>, progress: Progress) -> Self {
        Self {
            enricher,
            progress,
            keep_going: false,
        }
    }

    /// Emit records unenriched instead of aborting when a lookup fails.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Read every remaining row of `catalog` and enrich it.
    pub async fn run<R: Read>(&mut self, catalog: &mut CatalogReader<R>) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        let mut position = 0;

        for row in catalog.rows() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    self.progress.finish();
                    return Err(e);
                }
            };

            position += 1;
            let mut record = row.to_record(position);
            self.progress.row(&record);

            match self.enricher.enrich(&mut record).await {
                Ok(EnrichOutcome::Skipped) => report.skipped += 1,
                Ok(EnrichOutcome::NoMedia) => report.no_media += 1,
                Ok(EnrichOutcome::Enriched { tracks, .. }) => {
                    tracing::debug!(position, tracks, title = %record.title, "Record enriched");
                    report.enriched += 1;
                }
                Err(e) if self.keep_going && e.is_lookup_failure() => {
                    self.progress.finish();
                    tracing::warn!(
                        position,
                        artist = %record.artist,
                        title = %record.title,
                        "Keeping catalog data: {}",
                        e
                    );
                    report.failed += 1;
                }
                Err(e) => {
                    self.progress.finish();
                    return Err(e.context(format!(
                        "record {} ({} - {})",
                        position, record.artist, record.title
                    )));
                }
            }

            report.records.push(record);
        }

        self.progress.finish();

        tracing::info!(
            records = report.records.len(),
            enriched = report.enriched,
            skipped = report.skipped,
            no_media = report.no_media,
            failed = report.failed,
            "Catalog processed"
        );

        Ok(report)
    }
}
