//! Trait definitions for the metadata service client.
//!
//! The enrichment engine only talks to [`MusicBrainzApi`], so tests can
//! substitute a scripted mock for the real HTTP client.
//!
//! # Example
//!
//! ```ignore
//! use record_sleeve::enrichment::traits::MusicBrainzApi;
//!
//! async fn title_of<T: MusicBrainzApi>(client: &T, id: &str) -> Result<String, LookupError> {
//!     Ok(client.fetch_release(id, &["recordings"]).await?.title)
//! }
//! ```

use async_trait::async_trait;

use super::domain::{ExternalRelease, LookupError};

/// Trait for MusicBrainz release lookup.
#[async_trait]
pub trait MusicBrainzApi: Send + Sync {
    /// Look up a release by its MusicBrainz ID.
    async fn fetch_release(
        &self,
        release_id: &str,
        include: &[&str],
    ) -> Result<ExternalRelease, LookupError>;
}

#[async_trait]
impl MusicBrainzApi for super::musicbrainz::MusicBrainzClient {
    async fn fetch_release(
        &self,
        release_id: &str,
        include: &[&str],
    ) -> Result<ExternalRelease, LookupError> {
        self.fetch_release(release_id, include).await
    }
}
