//! Catalog input: CSV reading and the row adapter.
//!
//! The first line of the catalog names the columns; every following line
//! is one record. Columns are matched by name, so their order in the file
//! does not matter. Recognized columns are [`FIELD_TITLE`], [`FIELD_ARTIST`],
//! [`FIELD_FLIGHT_CASE`] and [`FIELD_MUSICBRAINZ`]; anything else is ignored.
//!
//! A row whose field count differs from the header row is rejected with
//! [`Error::MalformedRow`] instead of being padded or truncated.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result, ResultExt};
use crate::model::Record;

pub const FIELD_TITLE: &str = "title";
pub const FIELD_ARTIST: &str = "artist";
pub const FIELD_FLIGHT_CASE: &str = "flight case";
pub const FIELD_MUSICBRAINZ: &str = "musicbrainz";

/// A row and header row had different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} fields, found {actual}")]
pub struct FieldCountMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// One catalog line keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    fields: HashMap<String, String>,
}

impl InputRow {
    /// Value of a column, or `""` when the catalog has no such column.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Build the (not yet enriched) record for this row.
    pub fn to_record(&self, position: usize) -> Record {
        Record {
            title: self.get(FIELD_TITLE).to_string(),
            artist: self.get(FIELD_ARTIST).to_string(),
            flight_case: self.get(FIELD_FLIGHT_CASE).to_string(),
            position,
            tracks: Vec::new(),
            external_id: self.get(FIELD_MUSICBRAINZ).to_string(),
        }
    }
}

/// Pair up a header row with a value row.
///
/// Fails when the two differ in length. If a header name repeats, the
/// rightmost column wins.
pub fn to_fields<S: AsRef<str>>(
    headers: &[S],
    values: &[S],
) -> std::result::Result<InputRow, FieldCountMismatch> {
    if headers.len() != values.len() {
        return Err(FieldCountMismatch {
            expected: headers.len(),
            actual: values.len(),
        });
    }

    let fields = headers
        .iter()
        .zip(values)
        .map(|(h, v)| (h.as_ref().to_string(), v.as_ref().to_string()))
        .collect();

    Ok(InputRow { fields })
}

/// Streaming reader over a CSV catalog.
pub struct CatalogReader<R> {
    inner: csv::Reader<R>,
    headers: Vec<String>,
}

impl CatalogReader<File> {
    /// Open a catalog file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(format!("Failed to open catalog {:?}", path))?;
        Self::from_reader(file)
    }
}

impl<R: Read> CatalogReader<R> {
    /// Wrap any reader and consume the header row.
    pub fn from_reader(reader: R) -> Result<Self> {
        // Flexible so that uneven rows reach `to_fields` and get a proper
        // MalformedRow error with line information.
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = inner
            .headers()
            .with_context("Failed to read catalog header row")?
            .iter()
            .map(String::from)
            .collect();

        if headers.is_empty() {
            return Err(Error::Catalog("no header row".to_string()));
        }

        tracing::debug!(columns = ?headers, "Read catalog header");

        Ok(Self { inner, headers })
    }

    /// Iterate over the remaining rows in file order.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<InputRow>> + '_ {
        let headers = &self.headers;
        self.inner.records().map(move |record| {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let values: Vec<&str> = record.iter().collect();
            let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

            to_fields(&header_refs, &values).map_err(|e| Error::MalformedRow {
                line,
                expected: e.expected,
                actual: e.actual,
            })
        })
    }
}
