//! Record enrichment - fetches release metadata from MusicBrainz.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types for releases and lookup errors
//! - **API DTOs** (`musicbrainz/dto.rs`) - Exact API response shapes
//! - **Adapter** (`musicbrainz/adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`musicbrainz/client.rs`) - HTTP client for the MusicBrainz API
//! - **Retry** (`retry.rs`) - Exponential backoff around lookups
//! - **Service** (`service.rs`) - Applies a release to a catalog record
//!
//! # Usage
//!
//! ```ignore
//! use record_sleeve::enrichment::{Enricher, MusicBrainzClient, RetryPolicy};
//!
//! let client = MusicBrainzClient::new(&config.musicbrainz)?;
//! let enricher = Enricher::new(&client, RetryPolicy::default());
//!
//! let outcome = enricher.enrich(&mut record).await?;
//! println!("{}: {} tracks", record.title, record.tracks.len());
//! ```

pub mod domain;
pub mod musicbrainz;
pub mod retry;
pub mod service;
pub mod traits;

pub use domain::{EnrichOutcome, ExternalRelease, LookupError};
pub use musicbrainz::MusicBrainzClient;
pub use retry::{RetryError, RetryPolicy};
pub use service::{Enricher, RELEASE_INCLUDES, join_artists};
pub use traits::MusicBrainzApi;
