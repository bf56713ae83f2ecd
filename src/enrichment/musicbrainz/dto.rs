//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! We use the /release endpoint with `inc=recordings+artists` to get the
//! track listing of every medium plus the release artist credit.

use serde::{Deserialize, Serialize};

/// Release lookup response (single release with includes)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseResponse {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Artist credits, in credit order
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Media (discs) in this release
    #[serde(default)]
    pub media: Vec<Medium>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// The artist
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

/// Artist info
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
    /// Artist type (Person, Group, etc.)
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    /// Position in release (disc number)
    pub position: Option<u32>,
    /// Format (CD, Vinyl, Digital, etc.)
    pub format: Option<String>,
    /// Number of tracks
    pub track_count: Option<u32>,
    /// Tracks on this medium
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track on a medium
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    /// MusicBrainz track ID
    pub id: Option<String>,
    /// Track position on medium
    pub position: Option<u32>,
    /// Track number as printed (e.g. "5", "A1")
    pub number: String,
    /// Track title (may differ from recording title)
    pub title: Option<String>,
    /// Track length in milliseconds
    pub length: Option<u64>,
    /// The recording this track plays
    pub recording: Recording,
}

/// Recording embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: Option<String>,
    /// Recording title
    pub title: String,
    /// Duration in milliseconds
    pub length: Option<u64>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a minimal release response
    #[test]
    fn test_parse_minimal_release() {
        let json = r#"{
            "id": "rel-123",
            "title": "Kind of Blue"
        }"#;

        let release: ReleaseResponse =
            serde_json::from_str(json).expect("Should parse minimal release");

        assert_eq!(release.id, "rel-123");
        assert_eq!(release.title, "Kind of Blue");
        assert!(release.artist_credit.is_empty());
        assert!(release.media.is_empty());
    }

    /// Test parsing a release with media, tracks and embedded recordings
    #[test]
    fn test_parse_release_with_recordings() {
        let json = r#"{
            "id": "rel-123",
            "title": "Kind of Blue",
            "status": "Official",
            "date": "1959-08-17",
            "country": "US",
            "artist-credit": [{
                "name": "Miles Davis",
                "joinphrase": "",
                "artist": {
                    "id": "art-1",
                    "name": "Miles Davis",
                    "sort-name": "Davis, Miles",
                    "type": "Person"
                }
            }],
            "media": [{
                "position": 1,
                "format": "12\" Vinyl",
                "track-count": 2,
                "tracks": [
                    {
                        "id": "trk-1",
                        "position": 1,
                        "number": "A1",
                        "title": "So What",
                        "length": 562000,
                        "recording": {"id": "rec-1", "title": "So What", "length": 562000}
                    },
                    {
                        "id": "trk-2",
                        "position": 2,
                        "number": "A2",
                        "title": "Freddie Freeloader",
                        "recording": {"id": "rec-2", "title": "Freddie Freeloader"}
                    }
                ]
            }]
        }"#;

        let release: ReleaseResponse =
            serde_json::from_str(json).expect("Should parse release with recordings");

        assert_eq!(release.status, Some("Official".to_string()));
        assert_eq!(release.artist_credit[0].artist.name, "Miles Davis");
        assert_eq!(
            release.artist_credit[0].artist.sort_name,
            Some("Davis, Miles".to_string())
        );

        let medium = &release.media[0];
        assert_eq!(medium.format, Some("12\" Vinyl".to_string()));
        assert_eq!(medium.track_count, Some(2));
        assert_eq!(medium.tracks[0].number, "A1");
        assert_eq!(medium.tracks[1].recording.title, "Freddie Freeloader");
        assert!(medium.tracks[1].length.is_none());
    }

    /// Test parsing collaboration (multiple artist credits)
    #[test]
    fn test_parse_collaboration() {
        let json = r#"{
            "id": "rel-collab",
            "title": "Under Pressure",
            "artist-credit": [
                {
                    "artist": {"id": "queen-id", "name": "Queen"},
                    "joinphrase": " & "
                },
                {
                    "artist": {"id": "bowie-id", "name": "David Bowie"},
                    "joinphrase": ""
                }
            ]
        }"#;

        let release: ReleaseResponse =
            serde_json::from_str(json).expect("Should parse collaboration");

        assert_eq!(release.artist_credit.len(), 2);
        assert_eq!(release.artist_credit[0].joinphrase, Some(" & ".to_string()));
        assert_eq!(release.artist_credit[1].artist.name, "David Bowie");
    }

    /// A track without its recording title is a broken response
    #[test]
    fn test_missing_recording_title_fails() {
        let json = r#"{
            "id": "rel-1",
            "title": "Broken",
            "media": [{
                "tracks": [{"number": "1", "recording": {"id": "rec-1"}}]
            }]
        }"#;

        assert!(serde_json::from_str::<ReleaseResponse>(json).is_err());
    }

    /// Test parsing error response
    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": "Not Found",
            "help": "For usage, please see: https://musicbrainz.org/doc/MusicBrainz_API"
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error, "Not Found");
        assert!(error.help.is_some());
    }
}
