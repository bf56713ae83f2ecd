//! Internal domain models for release lookups.
//!
//! These types are OUR types - they don't change when the MusicBrainz API changes.
//! Responses get converted into these types by `musicbrainz::adapter`.

/// A release as returned by a metadata lookup, flattened to what we use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalRelease {
    /// MusicBrainz release ID
    pub id: String,
    /// Authoritative release title
    pub title: String,
    /// Artist names from the artist credit, in credit order
    pub artist_names: Vec<String>,
    /// Media (discs, sides of a box set...) in release order
    pub media: Vec<Medium>,
}

/// One medium of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Medium {
    /// Position in the release (disc number)
    pub position: Option<u32>,
    /// Format (CD, 12" Vinyl, ...)
    pub format: Option<String>,
    pub tracks: Vec<ReleaseTrack>,
}

/// A track on a medium together with its recording title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTrack {
    /// Number as printed ("1", "A1", ...)
    pub number: String,
    pub recording_title: String,
}

/// What happened to a record during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// No release ID, nothing looked up
    Skipped,
    /// Lookup succeeded but the release has no media; record left as is
    NoMedia,
    /// Title, artist and tracks were replaced from the release
    Enriched {
        tracks: usize,
        /// Media after the first one, which are not used
        discarded_media: usize,
    },
}

/// Errors from a single release lookup.
///
/// Every variant is retried by [`RetryPolicy`](super::RetryPolicy) until
/// the policy gives up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("Invalid release ID: {0}")]
    InvalidId(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::Http {
            status: 502,
            reason: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(
            LookupError::Parse("missing field `title`".into()).to_string(),
            "Failed to parse response: missing field `title`"
        );
    }
}
