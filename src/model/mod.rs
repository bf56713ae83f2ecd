//! Core data models for the record catalog.
//!
//! A [`Record`] is one physical item from the catalog (an LP, a CD box...)
//! and the unit that gets enriched and rendered. Its [`Track`] list is
//! empty until a MusicBrainz lookup fills it in.

use serde::Serialize;

/// One item of the catalog, as rendered into the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Display title (catalog value, or the release title once enriched)
    pub title: String,
    /// Display artist (catalog value, or the joined artist credit once enriched)
    pub artist: String,
    /// Storage location label, passed through untouched
    pub flight_case: String,
    /// 1-based position in the catalog file
    pub position: usize,
    /// Tracks of the first medium of the release, in release order
    pub tracks: Vec<Track>,
    /// MusicBrainz release ID; empty means "don't look this one up"
    #[serde(skip)]
    pub external_id: String,
}

impl Record {
    /// Whether this record asks for a MusicBrainz lookup.
    pub fn wants_enrichment(&self) -> bool {
        !self.external_id.is_empty()
    }
}

/// A track on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Track number as printed on the medium ("3", "A1", "B2"...)
    #[serde(rename = "track")]
    pub number: String,
    /// Recording title
    pub title: String,
}

impl Track {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
        }
    }
}
