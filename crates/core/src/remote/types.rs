//! Types for remote search results.

use serde::{Deserialize, Serialize};

/// A transient, not-yet-persisted result of a remote lookup.
///
/// Candidates live only as long as the query that produced them: a newer
/// query supersedes them and closing the search session discards them.
/// They are never written to the catalog directly; the normalizer turns a
/// candidate into a fresh [`Book`](crate::catalog::Book) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Provider-assigned volume id.
    pub external_id: String,
    /// Title, if the provider has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author list, if the provider has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Average rating (0-5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    /// Cover thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}
