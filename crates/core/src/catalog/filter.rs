//! Status-filtered projections of a catalog snapshot.
//!
//! Pure and synchronous: these never touch the store, they only reshape a
//! snapshot for presentation.

use super::{Book, ReadingStatus};

/// Entries whose status matches `selected`, or the full snapshot when no
/// status is selected.
///
/// Matching is tolerant of casing in stored values (the lenient status
/// parse already folds case). Legacy status values match no filter.
pub fn filter_by_status(books: &[Book], selected: Option<&ReadingStatus>) -> Vec<Book> {
    let Some(selected) = selected else {
        return books.to_vec();
    };

    if matches!(selected, ReadingStatus::Legacy(_)) {
        return Vec::new();
    }

    books
        .iter()
        .filter(|b| b.status == *selected)
        .cloned()
        .collect()
}

/// Shelf view: one bucket per canonical status, in reading order.
///
/// Entries with a legacy status land on the ShouldRead shelf through their
/// display status; the stored value is untouched.
pub fn partition_by_status(books: &[Book]) -> Vec<(ReadingStatus, Vec<Book>)> {
    [
        ReadingStatus::ShouldRead,
        ReadingStatus::Reading,
        ReadingStatus::Read,
    ]
    .into_iter()
    .map(|shelf| {
        let entries = books
            .iter()
            .filter(|b| b.status.display_status() == shelf)
            .cloned()
            .collect();
        (shelf, entries)
    })
    .collect()
}
