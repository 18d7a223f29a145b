//! Book storage
//!
//! The `Library` owns the SQLite connection for the whole process lifetime
//! and exposes the CRUD operations on the `books` table.
//!
//! Every operation is a single statement running in SQLite autocommit
//! mode; nothing spans more than one call.
//!
//! ## Usage
//!
//! ```ignore
//! let library = Library::open("biblioteca.db")?;
//!
//! let id = library.add("Dune", "Frank Herbert", Some("Sci-Fi"), ReadStatus::Unread)?;
//! let found = library.search("Herbert")?;
//!
//! library.close()?;
//! ```

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::models::{Book, ReadStatus};
use crate::storage::{init_schema, StorageError, StorageResult};

const SELECT_BOOKS: &str = "SELECT id, title, author, genre, status FROM books";

/// Handle to the book collection
pub struct Library {
    conn: Connection,
}

impl Library {
    /// Open or create the database file and make sure the schema exists
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let library = Self {
            conn: Connection::open(path)?,
        };
        library.initialize()?;

        debug!("Opened library at {:?}", path);
        Ok(library)
    }

    /// Open the database configured in `config`
    pub fn open_with_config(config: &Config) -> StorageResult<Self> {
        Self::open(&config.db_path)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let library = Self {
            conn: Connection::open_in_memory()?,
        };
        library.initialize()?;
        Ok(library)
    }

    /// Create the books table if it does not exist yet
    pub fn initialize(&self) -> StorageResult<()> {
        init_schema(&self.conn)?;
        Ok(())
    }

    /// Add a book, returning its newly assigned id
    pub fn add(
        &self,
        title: &str,
        author: &str,
        genre: Option<&str>,
        status: ReadStatus,
    ) -> StorageResult<i64> {
        logged(
            "add book",
            self.conn.execute(
                "INSERT INTO books (title, author, genre, status) VALUES (?1, ?2, ?3, ?4)",
                params![title, author, genre, status],
            ),
        )?;

        let id = self.conn.last_insert_rowid();
        info!(id, "Added book");
        Ok(id)
    }

    /// Get all books in id order
    pub fn list_all(&self) -> StorageResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_BOOKS))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    /// Get a book by id
    pub fn get(&self, id: i64) -> StorageResult<Option<Book>> {
        let book = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_BOOKS),
                params![id],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    /// Find books whose title, author or genre contains `term`
    ///
    /// Matching is a case-sensitive substring test; `%` and `_` have no
    /// special meaning.
    pub fn search(&self, term: &str) -> StorageResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE instr(title, ?1) > 0 OR instr(author, ?1) > 0 OR instr(genre, ?1) > 0 \
             ORDER BY id",
            SELECT_BOOKS
        ))?;
        let books = stmt
            .query_map(params![term], book_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(term, matches = books.len(), "Searched books");
        Ok(books)
    }

    /// Overwrite every field of an existing book
    ///
    /// Returns false when no book has that id.
    pub fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        genre: Option<&str>,
        status: ReadStatus,
    ) -> StorageResult<bool> {
        let changed = logged(
            "update book",
            self.conn.execute(
                "UPDATE books SET title = ?1, author = ?2, genre = ?3, status = ?4 WHERE id = ?5",
                params![title, author, genre, status, id],
            ),
        )?;

        if changed > 0 {
            info!(id, "Updated book");
        } else {
            debug!(id, "Update matched no book");
        }
        Ok(changed > 0)
    }

    /// Delete a book
    ///
    /// Returns false when no book has that id.
    pub fn delete(&self, id: i64) -> StorageResult<bool> {
        let removed = logged(
            "delete book",
            self.conn.execute("DELETE FROM books WHERE id = ?1", params![id]),
        )?;

        if removed > 0 {
            info!(id, "Deleted book");
        } else {
            debug!(id, "Delete matched no book");
        }
        Ok(removed > 0)
    }

    /// Release the database connection
    pub fn close(self) -> StorageResult<()> {
        self.conn.close().map_err(|(_, e)| {
            error!("Failed to close library: {}", e);
            StorageError::from(e)
        })?;
        debug!("Closed library");
        Ok(())
    }
}

/// Log a failed write before handing the error back
fn logged<T>(operation: &str, result: rusqlite::Result<T>) -> StorageResult<T> {
    result.map_err(|e| {
        error!("Failed to {}: {}", operation, e);
        StorageError::from(e)
    })
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        status: row.get(4)?,
    })
}
