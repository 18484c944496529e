//! Core catalog logic for the library manager.
//! This crate owns the record type, the SQLite store and its invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, DEFAULT_DB_FILE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookId, BookStatus, BookValidationError};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::catalog_service::{CatalogService, RemoveOutcome, StatusUpdateOutcome};

/// Catalog service backed by the SQLite repository.
pub type Catalog = CatalogService<SqliteBookRepository>;

/// Opens the catalog stored at `path`, creating the file and table if needed.
pub fn open_catalog(path: impl AsRef<std::path::Path>) -> RepoResult<Catalog> {
    Ok(CatalogService::new(SqliteBookRepository::open(path)?))
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
