//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum for a catalog run
//! - Module-specific errors ([`LookupError`], [`RetryError`]) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! A response with no media is not an error; see
//! [`EnrichOutcome::NoMedia`](crate::enrichment::EnrichOutcome::NoMedia).

use std::path::PathBuf;
use std::time::Duration;

use crate::enrichment::{LookupError, RetryError};

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file could not be parsed as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A catalog row has a different number of fields than the header row
    #[error("Malformed row at line {line}: expected {expected} fields, found {actual}")]
    MalformedRow {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// A release lookup kept failing until the retry policy gave up
    #[error("Lookup of release {id} gave up after {attempts} attempts ({elapsed:?}): {source}")]
    LookupExhausted {
        id: String,
        attempts: u32,
        elapsed: Duration,
        #[source]
        source: LookupError,
    },

    /// The catalog file cannot be used as input at all
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read or parsed
    #[error("Invalid config file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    /// Document rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a retry failure for the release `id`.
    pub fn from_retry(id: impl Into<String>, err: RetryError) -> Self {
        Self::LookupExhausted {
            id: id.into(),
            attempts: err.attempts,
            elapsed: err.elapsed,
            source: err.last,
        }
    }

    /// True for failures of a single lookup, as opposed to bad input.
    pub fn is_lookup_failure(&self) -> bool {
        match self {
            Self::LookupExhausted { .. } => true,
            Self::WithContext { source, .. } => source.is_lookup_failure(),
            _ => false,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, csv::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Csv(e).context(ctx))
    }
}
