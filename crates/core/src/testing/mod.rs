//! Testing utilities and mock implementations.
//!
//! Provides a mock remote catalog so search and import flows can be tested
//! without real network access, plus fixture helpers for building test data.
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffale_core::testing::{fixtures, MockRemoteCatalog};
//!
//! let remote = MockRemoteCatalog::new();
//! remote.enqueue_results(vec![
//!     fixtures::search_candidate("vol-1", "Dune", "Frank Herbert"),
//! ]).await;
//!
//! // Use in a SearchController...
//! ```

mod mock_remote;

pub use mock_remote::MockRemoteCatalog;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Book, ReadingStatus, UNASSIGNED_ID};
    use crate::remote::SearchCandidate;

    /// Create a test search candidate with reasonable defaults.
    pub fn search_candidate(external_id: &str, title: &str, author: &str) -> SearchCandidate {
        SearchCandidate {
            external_id: external_id.to_string(),
            title: Some(title.to_string()),
            authors: Some(vec![author.to_string()]),
            description: Some(format!("A book called {}.", title)),
            average_rating: Some(4.0),
            thumbnail_url: Some(format!("http://books.example.com/{}.jpg", external_id)),
        }
    }

    /// Create a test search candidate with every optional field missing.
    pub fn sparse_candidate(external_id: &str) -> SearchCandidate {
        SearchCandidate {
            external_id: external_id.to_string(),
            title: None,
            authors: None,
            description: None,
            average_rating: None,
            thumbnail_url: None,
        }
    }

    /// Create an unpersisted test book.
    pub fn book(title: &str, author: &str, status: ReadingStatus) -> Book {
        Book {
            id: UNASSIGNED_ID,
            title: title.to_string(),
            author: author.to_string(),
            status,
            description: None,
            rating: None,
            thumbnail_url: None,
        }
    }
}
