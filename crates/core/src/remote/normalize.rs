//! Normalization of raw search candidates into catalog entries.

use crate::catalog::{Book, ReadingStatus, UNASSIGNED_ID};

use super::SearchCandidate;

/// Which placeholder literals to use for missing fields.
///
/// The search preview list and the direct add-to-library form use different
/// literals; the two are never mixed within one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeContext {
    /// Search result preview: "No title" / "Unknown author".
    Preview,
    /// Add-to-library form: "Untitled" / "Unknown".
    DirectAdd,
}

impl NormalizeContext {
    fn title_fallback(self) -> &'static str {
        match self {
            Self::Preview => "No title",
            Self::DirectAdd => "Untitled",
        }
    }

    fn author_fallback(self) -> &'static str {
        match self {
            Self::Preview => "Unknown author",
            Self::DirectAdd => "Unknown",
        }
    }
}

/// Map a raw candidate into a fresh, unpersisted catalog entry.
///
/// Total over any well-formed candidate: missing fields get placeholder
/// defaults, the status is always `ShouldRead` and the id is left
/// unassigned so the store allocates one on insert.
pub fn normalize(candidate: &SearchCandidate, context: NormalizeContext) -> Book {
    let title = candidate
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| context.title_fallback().to_string());

    let author = match &candidate.authors {
        Some(authors) if !authors.is_empty() => authors.join(", "),
        _ => context.author_fallback().to_string(),
    };

    Book {
        id: UNASSIGNED_ID,
        title,
        author,
        status: ReadingStatus::ShouldRead,
        description: candidate.description.clone(),
        rating: candidate.average_rating.map(format_rating),
        thumbnail_url: candidate.thumbnail_url.clone(),
    }
}

// Whole-number ratings keep a trailing decimal ("4.0", not "4").
fn format_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}
