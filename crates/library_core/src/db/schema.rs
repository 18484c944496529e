//! Catalog table definition.

use crate::db::DbResult;
use rusqlite::Connection;

/// Name of the single catalog table.
pub const BOOKS_TABLE: &str = "books";

const CREATE_BOOKS_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER NOT NULL,
    status TEXT NOT NULL
);";

/// Creates the `books` table if absent. Safe to call on an existing database.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_BOOKS_SQL)?;
    Ok(())
}
