//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If MusicBrainz changes their response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::enrichment::domain::{ExternalRelease, Medium, ReleaseTrack};

/// Convert a MusicBrainz release response to an ExternalRelease
pub fn to_release(response: dto::ReleaseResponse) -> ExternalRelease {
    // Official artist names, not the credited names or join phrases
    let artist_names = response
        .artist_credit
        .into_iter()
        .map(|credit| credit.artist.name)
        .collect();

    let media = response.media.into_iter().map(to_medium).collect();

    ExternalRelease {
        id: response.id,
        title: response.title,
        artist_names,
        media,
    }
}

fn to_medium(medium: dto::Medium) -> Medium {
    Medium {
        position: medium.position,
        format: medium.format,
        tracks: medium
            .tracks
            .into_iter()
            .map(|t| ReleaseTrack {
                number: t.number,
                recording_title: t.recording.title,
            })
            .collect(),
    }
}
