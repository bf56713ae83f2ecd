//! Enrichment service - replaces catalog data with MusicBrainz data
//!
//! For a record with a release ID:
//! 1. Fetch the release (recordings + artists) through the retry policy
//! 2. If the release has no media, leave the record alone
//! 3. Otherwise take the title, the comma-joined artist names and the
//!    track list of the FIRST medium
//!
//! Only the first medium is used; later discs of a multi-disc release are
//! dropped (and logged at debug level).

use super::domain::{EnrichOutcome, ExternalRelease};
use super::retry::RetryPolicy;
use super::traits::MusicBrainzApi;
use crate::error::{Error, Result};
use crate::model::{Record, Track};

/// Sub-resources requested with every release lookup
pub const RELEASE_INCLUDES: &[&str] = &["recordings", "artists"];

/// Separator between artist names in [`Record::artist`]
pub const ARTIST_SEPARATOR: &str = ",";

/// Enriches records one at a time against a metadata client.
pub struct Enricher<'a, C: MusicBrainzApi> {
    client: &'a C,
    policy: RetryPolicy,
}

impl<'a, C: MusicBrainzApi> Enricher<'a, C> {
    pub fn new(client: &'a C, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Enrich `record` in place.
    ///
    /// Records without a release ID are returned untouched without any
    /// network call. A lookup that still fails when the retry policy gives
    /// up is returned as [`Error::LookupExhausted`]; the record is not
    /// modified in that case.
    pub async fn enrich(&self, record: &mut Record) -> Result<EnrichOutcome> {
        if !record.wants_enrichment() {
            return Ok(EnrichOutcome::Skipped);
        }

        let id = record.external_id.as_str();
        let release = self
            .policy
            .retry(|| self.client.fetch_release(id, RELEASE_INCLUDES))
            .await
            .map_err(|e| Error::from_retry(id, e))?;

        Ok(apply_release(record, release))
    }
}

/// Overwrite title, artist and tracks of `record` from `release`.
pub fn apply_release(record: &mut Record, release: ExternalRelease) -> EnrichOutcome {
    let mut media = release.media.into_iter();
    let Some(first) = media.next() else {
        tracing::debug!(
            position = record.position,
            release = %release.id,
            "Release has no media, keeping catalog data"
        );
        return EnrichOutcome::NoMedia;
    };
    let discarded_media = media.count();
    if discarded_media > 0 {
        tracing::debug!(
            position = record.position,
            release = %release.id,
            discarded_media,
            "Using first medium only"
        );
    }

    record.title = release.title;
    record.artist = join_artists(&release.artist_names);
    record.tracks = first
        .tracks
        .into_iter()
        .map(|t| Track::new(t.number, t.recording_title))
        .collect();

    EnrichOutcome::Enriched {
        tracks: record.tracks.len(),
        discarded_media,
    }
}

/// Join artist names exactly as credited: no trimming, no dedup.
pub fn join_artists(names: &[String]) -> String {
    names.join(ARTIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::domain::LookupError;
    use crate::enrichment::traits::mocks::MockMusicBrainz;
    use crate::test_utils::{fast_retry_policy, mock_record, mock_release};
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_id_is_noop_without_calls() {
        let mock = MockMusicBrainz::new();
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "X", "Y", "");
        let before = record.clone();

        let outcome = enricher.enrich(&mut record).await.unwrap();

        assert_eq!(outcome, EnrichOutcome::Skipped);
        assert_eq!(record, before);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_enrich_uses_first_medium() {
        let release = mock_release(
            "Sign o' the Times",
            &["Prince"],
            &[
                &[("1", "Sign o' the Times"), ("2", "Play in the Sunshine")],
                &[("1", "It"), ("2", "Starfish and Coffee"), ("3", "Slow Love")],
            ],
        );
        let mock = MockMusicBrainz::new().with_release("mbid", release);
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(3, "SOTT", "prince", "mbid");

        let outcome = enricher.enrich(&mut record).await.unwrap();

        assert_eq!(
            outcome,
            EnrichOutcome::Enriched {
                tracks: 2,
                discarded_media: 1
            }
        );
        assert_eq!(record.title, "Sign o' the Times");
        assert_eq!(record.artist, "Prince");
        assert_eq!(
            record.tracks,
            vec![
                Track::new("1", "Sign o' the Times"),
                Track::new("2", "Play in the Sunshine"),
            ]
        );
        assert_eq!(record.position, 3);
    }

    #[tokio::test]
    async fn test_enrich_requests_recordings_and_artists() {
        let mock = MockMusicBrainz::new().with_release("mbid", mock_release("T", &["A"], &[&[]]));
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "t", "a", "mbid");

        enricher.enrich(&mut record).await.unwrap();

        assert_eq!(
            mock.calls(),
            vec![(
                "mbid".to_string(),
                vec!["recordings".to_string(), "artists".to_string()]
            )]
        );
    }

    #[tokio::test]
    async fn test_zero_media_leaves_record_unchanged() {
        let mock = MockMusicBrainz::new().with_release("mbid", mock_release("Other", &["Z"], &[]));
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "X", "Y", "mbid");
        let before = record.clone();

        let outcome = enricher.enrich(&mut record).await.unwrap();

        assert_eq!(outcome, EnrichOutcome::NoMedia);
        assert_eq!(record, before);
    }

    #[tokio::test]
    async fn test_existing_tracks_are_replaced() {
        let mock = MockMusicBrainz::new()
            .with_release("mbid", mock_release("T", &["A"], &[&[("A1", "New")]]));
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "t", "a", "mbid");
        record.tracks = vec![Track::new("9", "Stale")];

        enricher.enrich(&mut record).await.unwrap();

        assert_eq!(record.tracks, vec![Track::new("A1", "New")]);
    }

    #[tokio::test]
    async fn test_flight_case_is_untouched() {
        let mock = MockMusicBrainz::new()
            .with_release("mbid", mock_release("T", &["A"], &[&[("1", "x")]]));
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "t", "a", "mbid");
        record.flight_case = "Case 7".to_string();

        enricher.enrich(&mut record).await.unwrap();

        assert_eq!(record.flight_case, "Case 7");
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried() {
        let release = mock_release("T", &["A"], &[&[("1", "x")]]);
        let mock = MockMusicBrainz::new().script(
            "mbid",
            vec![
                Err(LookupError::ServiceUnavailable),
                Err(LookupError::Network("reset".into())),
                Ok(release),
            ],
        );
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "t", "a", "mbid");

        let outcome = enricher.enrich(&mut record).await.unwrap();

        assert!(matches!(outcome, EnrichOutcome::Enriched { tracks: 1, .. }));
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_lookup_propagates_and_keeps_record() {
        let mock = MockMusicBrainz::new().with_error("mbid", LookupError::ServiceUnavailable);
        let policy = RetryPolicy {
            max_attempts: Some(3),
            ..fast_retry_policy()
        };
        let enricher = Enricher::new(&mock, policy);
        let mut record = mock_record(1, "X", "Y", "mbid");
        let before = record.clone();

        let err = enricher.enrich(&mut record).await.unwrap_err();

        assert!(matches!(
            err,
            Error::LookupExhausted { ref id, attempts: 3, .. } if id == "mbid"
        ));
        assert_eq!(record, before);
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_garbled_response_is_retried() {
        let release = mock_release("T", &["A"], &[&[("1", "x")]]);
        let mock = MockMusicBrainz::new().script(
            "mbid",
            vec![Err(LookupError::Parse("truncated".into())), Ok(release)],
        );
        let enricher = Enricher::new(&mock, fast_retry_policy());
        let mut record = mock_record(1, "t", "a", "mbid");

        let outcome = enricher.enrich(&mut record).await.unwrap();

        assert!(matches!(outcome, EnrichOutcome::Enriched { tracks: 1, .. }));
        assert_eq!(record.title, "T");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_not_found_is_retried_then_exhausted() {
        let mock = MockMusicBrainz::new();
        let policy = RetryPolicy {
            max_attempts: Some(2),
            ..fast_retry_policy()
        };
        let enricher = Enricher::new(&mock, policy);
        let mut record = mock_record(1, "X", "Y", "unknown");

        let err = enricher.enrich(&mut record).await.unwrap_err();

        assert!(matches!(
            err,
            Error::LookupExhausted {
                attempts: 2,
                source: LookupError::NotFound(_),
                ..
            }
        ));
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_elapsed_bound_stops_retrying() {
        let mock = MockMusicBrainz::new().with_error("mbid", LookupError::RateLimited);
        let policy = RetryPolicy {
            max_elapsed: Some(Duration::from_millis(15)),
            max_attempts: None,
            ..fast_retry_policy()
        };
        let enricher = Enricher::new(&mock, policy);
        let mut record = mock_record(1, "X", "Y", "mbid");

        let err = enricher.enrich(&mut record).await.unwrap_err();

        assert!(matches!(err, Error::LookupExhausted { .. }));
    }

    #[test]
    fn test_join_artists() {
        let names = vec!["Bob".to_string(), "Alice".to_string()];
        assert_eq!(join_artists(&names), "Bob,Alice");
    }

    #[test]
    fn test_join_artists_keeps_duplicates_and_spaces() {
        let names = vec![" Bob".to_string(), "Bob".to_string(), "Alice ".to_string()];
        assert_eq!(join_artists(&names), " Bob,Bob,Alice ");
    }

    #[test]
    fn test_join_no_artists_is_empty() {
        assert_eq!(join_artists(&[]), "");
    }
}
