//! Local book catalog - the durable reading list.
//!
//! The catalog exclusively owns entry identity and durability. Every
//! committed mutation pushes a full snapshot to all live observers, so a
//! subscriber never sees a half-applied write.

mod filter;
mod sqlite;
mod types;

pub use filter::{filter_by_status, partition_by_status};
pub use sqlite::SqliteCatalog;
pub use types::*;

use tokio::sync::watch;

/// Trait for book catalog storage.
pub trait BookCatalog: Send + Sync {
    /// Subscribe to the live catalog.
    ///
    /// The receiver always holds the latest committed snapshot, ordered by
    /// descending id (newest first), and gets a new one after every
    /// committed mutation. Dropping the receiver detaches that subscriber
    /// only; the channel never closes while the store lives.
    fn observe_all(&self) -> watch::Receiver<Vec<Book>>;

    /// Insert or replace a book by id.
    ///
    /// An unassigned id inserts the book and allocates a fresh unique id;
    /// an id matching an existing row fully replaces that row. Both "add
    /// book" and "change status" go through here. Returns the book with its
    /// assigned id.
    fn upsert(&self, book: &Book) -> Result<Book, CatalogError>;

    /// Remove a book by id.
    ///
    /// Removing an id that is not present is a no-op, not an error.
    fn remove(&self, book: &Book) -> Result<(), CatalogError>;
}
