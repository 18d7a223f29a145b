//! SQLite schema for the book collection
//!
//! A single table. The CHECK constraint on `status` keeps the stored
//! value inside the two-valued read/unread enumeration no matter who
//! writes to the file.

use rusqlite::{Connection, Result};

/// Initialize the database schema
///
/// Safe to call on every open; existing data is left untouched.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT,
            status TEXT NOT NULL CHECK (status IN ('Leído', 'No leído'))
        );
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name = ?")
            .and_then(|mut stmt| stmt.exists([name]))
            .unwrap()
    }

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, "books"));

        init_schema(&conn).unwrap();

        assert!(table_exists(&conn, "books"));
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO books (title, author, genre, status) VALUES ('Dune', 'Frank Herbert', NULL, 'Leído')",
            [],
        )
        .unwrap();

        // Second run must not drop or recreate the table
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_status_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let insert = "INSERT INTO books (title, author, genre, status) VALUES ('t', 'a', NULL, ?)";
        assert!(conn.execute(insert, ["Leído"]).is_ok());
        assert!(conn.execute(insert, ["No leído"]).is_ok());
        assert!(conn.execute(insert, ["Read"]).is_err());
        assert!(conn.execute(insert, ["leído"]).is_err());
        assert!(conn
            .execute(
                "INSERT INTO books (title, author, genre, status) VALUES ('t', 'a', NULL, NULL)",
                [],
            )
            .is_err());
    }

    #[test]
    fn test_title_and_author_not_null() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        assert!(conn
            .execute(
                "INSERT INTO books (title, author, genre, status) VALUES (NULL, 'a', NULL, 'Leído')",
                [],
            )
            .is_err());
        assert!(conn
            .execute(
                "INSERT INTO books (title, author, genre, status) VALUES ('t', NULL, NULL, 'Leído')",
                [],
            )
            .is_err());
    }
}
