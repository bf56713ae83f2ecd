//! Test utilities and fixtures for record-sleeve tests.
//!
//! Common builders for records, releases and retry policies, to keep
//! the tests short.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_record, mock_release};
//!
//! let record = mock_record(1, "Title", "Artist", "mbid");
//! let release = mock_release("Title", &["Artist"], &[&[("1", "Song")]]);
//! ```

use std::time::Duration;

use crate::enrichment::RetryPolicy;
use crate::enrichment::domain::{ExternalRelease, Medium, ReleaseTrack};
use crate::model::Record;

/// A record as the batch driver would build it from a catalog row.
pub fn mock_record(position: usize, title: &str, artist: &str, external_id: &str) -> Record {
    Record {
        title: title.to_string(),
        artist: artist.to_string(),
        flight_case: String::new(),
        position,
        tracks: Vec::new(),
        external_id: external_id.to_string(),
    }
}

/// A release with one medium per entry of `media`, each a list of
/// `(number, recording title)` pairs.
pub fn mock_release(title: &str, artists: &[&str], media: &[&[(&str, &str)]]) -> ExternalRelease {
    ExternalRelease {
        id: format!("release-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        artist_names: artists.iter().map(|a| a.to_string()).collect(),
        media: media
            .iter()
            .enumerate()
            .map(|(i, tracks)| Medium {
                position: Some(i as u32 + 1),
                format: Some("CD".to_string()),
                tracks: tracks
                    .iter()
                    .map(|(number, title)| ReleaseTrack {
                        number: number.to_string(),
                        recording_title: title.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// A retry policy with millisecond delays that gives up after five attempts.
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy {
        initial_interval: Duration::from_millis(1),
        multiplier: 2.0,
        max_interval: Duration::from_millis(4),
        max_elapsed: None,
        max_attempts: Some(5),
    }
}
