//! SQLite-backed book catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};
use tokio::sync::watch;
use tracing::debug;

use super::{Book, BookCatalog, CatalogError, ReadingStatus, UNASSIGNED_ID};

/// SQLite-backed book catalog.
///
/// A single connection behind a mutex serializes writers into a total
/// order. The snapshot is republished while the lock is still held, so
/// observers only ever see committed states, in write order.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
    snapshot_tx: watch::Sender<Vec<Book>>,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Storage(e.to_string()))?;
        Self::with_connection(conn)
    }

    /// Create an in-memory SQLite catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Storage(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, CatalogError> {
        Self::initialize_schema(&conn)?;
        let snapshot = Self::load_snapshot(&conn)?;
        let (snapshot_tx, _) = watch::channel(snapshot);
        Ok(Self {
            conn: Mutex::new(conn),
            snapshot_tx,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            -- Reading list entries (one row per book, keyed by surrogate id)
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                status TEXT NOT NULL,
                description TEXT,
                rating TEXT,
                thumbnail_url TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_books_status ON books(status);
            "#,
        )
        .map_err(|e| CatalogError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Read the full table, newest entries first.
    fn load_snapshot(conn: &Connection) -> Result<Vec<Book>, CatalogError> {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, author, status, description, rating, thumbnail_url
                 FROM books ORDER BY id DESC",
            )
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_book)
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row.map_err(|e| CatalogError::Storage(e.to_string()))?);
        }
        Ok(books)
    }

    fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<Book> {
        let status: String = row.get(3)?;

        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            status: ReadingStatus::parse(&status),
            description: row.get(4)?,
            rating: row.get(5)?,
            thumbnail_url: row.get(6)?,
        })
    }

    /// Publish the current table state to all observers.
    ///
    /// Must be called with the connection lock held so snapshots land in
    /// write order.
    fn publish_snapshot(&self, conn: &Connection) -> Result<(), CatalogError> {
        let snapshot = Self::load_snapshot(conn)?;
        self.snapshot_tx.send_replace(snapshot);
        Ok(())
    }
}

impl BookCatalog for SqliteCatalog {
    fn observe_all(&self) -> watch::Receiver<Vec<Book>> {
        self.snapshot_tx.subscribe()
    }

    fn upsert(&self, book: &Book) -> Result<Book, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let mut stored = book.clone();
        if book.id == UNASSIGNED_ID {
            conn.execute(
                "INSERT INTO books (title, author, status, description, rating, thumbnail_url)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    &book.title,
                    &book.author,
                    book.status.as_str(),
                    &book.description,
                    &book.rating,
                    &book.thumbnail_url,
                ],
            )
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

            stored.id = conn.last_insert_rowid();
            debug!("Inserted book id={} title='{}'", stored.id, stored.title);
        } else {
            // Full row replacement, not a field merge.
            conn.execute(
                "INSERT OR REPLACE INTO books (id, title, author, status, description, rating, thumbnail_url)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    book.id,
                    &book.title,
                    &book.author,
                    book.status.as_str(),
                    &book.description,
                    &book.rating,
                    &book.thumbnail_url,
                ],
            )
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

            debug!("Replaced book id={} status={}", book.id, book.status);
        }

        self.publish_snapshot(&conn)?;
        Ok(stored)
    }

    fn remove(&self, book: &Book) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn
            .execute("DELETE FROM books WHERE id = ?", params![book.id])
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        // Removing an id that is not present is a no-op, not an error.
        if rows_affected > 0 {
            debug!("Removed book id={}", book.id);
            self.publish_snapshot(&conn)?;
        }

        Ok(())
    }
}
