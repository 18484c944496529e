//! Book repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the statement-level operations over the `books` table.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Book::validate()` before SQL mutations.
//! - Inserted rows always start as `available`.
//! - Read paths reject unknown status text instead of masking it.
//! - Every mutation is a single autocommit statement.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::book::{Book, BookId, BookStatus, BookValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    author,
    year,
    status
FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for catalog persistence.
///
/// Mutations return whether a row was affected; callers decide how to
/// report a miss.
pub trait BookRepository {
    fn insert_book(&self, book: &Book) -> RepoResult<BookId>;
    fn delete_book(&self, id: BookId) -> RepoResult<bool>;
    fn search_books(&self, keyword: &str) -> RepoResult<Vec<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn set_status(&self, id: BookId, status: BookStatus) -> RepoResult<bool>;
    /// Releases the underlying storage handle.
    fn close(self) -> RepoResult<()>
    where
        Self: Sized;
}

/// SQLite-backed book repository owning its connection.
pub struct SqliteBookRepository {
    conn: Connection,
}

impl SqliteBookRepository {
    /// Wraps a connection that already has the catalog table.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (or creates) the catalog database at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Borrow of the underlying connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl BookRepository for SqliteBookRepository {
    fn insert_book(&self, book: &Book) -> RepoResult<BookId> {
        book.validate()?;

        self.conn.execute(
            "INSERT INTO books (title, author, year, status) VALUES (?1, ?2, ?3, ?4);",
            params![
                book.title.as_str(),
                book.author.as_str(),
                book.year,
                BookStatus::Available.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn search_books(&self, keyword: &str) -> RepoResult<Vec<Book>> {
        let pattern = format!("%{}%", escape_like(keyword));
        let mut stmt = self.conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE title LIKE ?1 ESCAPE '\\'
                OR author LIKE ?1 ESCAPE '\\'
                OR CAST(year AS TEXT) LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([pattern])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn set_status(&self, id: BookId, status: BookStatus) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE books SET status = ?1 WHERE id = ?2;",
            params![status.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    fn close(self) -> RepoResult<()> {
        self.conn.close().map_err(|(_, err)| RepoError::from(err))
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let status_text: String = row.get("status")?;
    let status = status_text.parse::<BookStatus>().map_err(|_| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in books.status"))
    })?;

    Ok(Book {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        author: row.get("author")?,
        year: row.get("year")?,
        status,
    })
}

/// Escapes LIKE metacharacters so the keyword matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_prefixes_metacharacters() {
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
    }

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("Dune"), "Dune");
    }
}
