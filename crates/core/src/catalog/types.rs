//! Types for the book catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel id for a book that has not been persisted yet.
/// The store allocates a real id on insert.
pub const UNASSIGNED_ID: i64 = 0;

/// A persisted catalog entry: one book on the reading list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Surrogate key assigned by the store; `UNASSIGNED_ID` until inserted.
    #[serde(default)]
    pub id: i64,
    /// Book title (non-empty).
    pub title: String,
    /// Author display string, may be "Unknown".
    pub author: String,
    /// Reading status.
    #[serde(default)]
    pub status: ReadingStatus,
    /// Synopsis or notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// String-encoded numeric rating (e.g. "4.5").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Cover thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Book {
    /// Whether the store has assigned this book an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}

/// Reading status of a catalog entry.
///
/// Stored as a string column; parsing is lenient so that rows written by
/// older versions with unrecognized status values still load. Such values
/// are preserved verbatim in the `Legacy` variant and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadingStatus {
    ShouldRead,
    Reading,
    Read,
    /// Unrecognized stored value, kept byte-for-byte.
    Legacy(String),
}

impl ReadingStatus {
    /// Lenient, case-insensitive parse of a stored status string.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "SHOULD_READ" => Self::ShouldRead,
            "READING" => Self::Reading,
            "READ" => Self::Read,
            _ => Self::Legacy(raw.to_string()),
        }
    }

    /// Canonical string form; legacy values return their raw string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ShouldRead => "SHOULD_READ",
            Self::Reading => "READING",
            Self::Read => "READ",
            Self::Legacy(raw) => raw,
        }
    }

    /// Status used for presentation. Legacy values fall back to
    /// `ShouldRead` without mutating the stored value.
    pub fn display_status(&self) -> Self {
        match self {
            Self::Legacy(_) => Self::ShouldRead,
            other => other.clone(),
        }
    }
}

impl Default for ReadingStatus {
    fn default() -> Self {
        Self::ShouldRead
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ReadingStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ReadingStatus> for String {
    fn from(status: ReadingStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(String),
}
