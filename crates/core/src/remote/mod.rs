//! Remote book metadata provider integration.
//!
//! A single read endpoint: free-text query in, raw candidate records out.
//! This layer performs no retries; retry policy, if any, belongs to the
//! caller. The fixed HTTP client timeout is the only timeout applied here.

mod google_books;
mod normalize;
mod types;

pub use google_books::{GoogleBooksClient, GoogleBooksConfig};
pub use normalize::{normalize, NormalizeContext};
pub use types::SearchCandidate;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the remote metadata provider.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body did not decode.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Trait for remote book catalog clients.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Search the provider by free-text query. Pure read, no side effects.
    ///
    /// Callers enforce the minimum query length before invoking.
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, RemoteError>;
}
