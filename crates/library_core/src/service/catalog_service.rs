//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the catalog operations used by the shell: add, remove, search,
//!   list, update-status and close.
//! - Turn affected-row counts into reportable outcomes.
//!
//! # Invariants
//! - New books always start as `available`.
//! - Invalid status text never reaches the repository.
//! - Not-found is an outcome, never an error.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookId, BookStatus};
use crate::repo::book_repo::{BookRepository, RepoResult};
use log::{info, warn};

/// Result of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Result of a status update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdateOutcome {
    Updated,
    NotFound,
    /// Rejected before touching the store; carries the raw input.
    InvalidStatus(String),
}

/// Catalog store over a repository implementation.
///
/// Owns the repository (and with it the connection) until [`close`] is called.
///
/// [`close`]: CatalogService::close
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new book with status `available` and returns its id.
    ///
    /// # Errors
    /// - `RepoError::Validation` for a blank title or author; nothing is written.
    pub fn add(&self, title: &str, author: &str, year: i32) -> RepoResult<BookId> {
        let book = Book::new(title, author, year);
        match self.repo.insert_book(&book) {
            Ok(id) => {
                info!("event=book_add module=catalog status=ok book_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=book_add module=catalog status=error error={err}");
                Err(err)
            }
        }
    }

    /// Deletes the book with `id`. Removing a missing id reports `NotFound`.
    pub fn remove(&self, id: BookId) -> RepoResult<RemoveOutcome> {
        let outcome = if self.repo.delete_book(id)? {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        };
        info!(
            "event=book_remove module=catalog status=ok book_id={id} outcome={outcome:?}"
        );
        Ok(outcome)
    }

    /// Substring search over title, author and year.
    pub fn search(&self, keyword: &str) -> RepoResult<Vec<Book>> {
        let books = self.repo.search_books(keyword)?;
        // Keyword text stays out of the log; only its size is recorded.
        info!(
            "event=book_search module=catalog status=ok keyword_chars={} hits={}",
            keyword.chars().count(),
            books.len()
        );
        Ok(books)
    }

    pub fn list(&self) -> RepoResult<Vec<Book>> {
        let books = self.repo.list_books()?;
        info!(
            "event=book_list module=catalog status=ok count={}",
            books.len()
        );
        Ok(books)
    }

    pub fn get(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Parses `raw_status` and applies it to the book with `id`.
    ///
    /// Text other than `available` / `checked_out` yields
    /// `InvalidStatus` without any store access.
    pub fn update_status(&self, id: BookId, raw_status: &str) -> RepoResult<StatusUpdateOutcome> {
        match raw_status.parse::<BookStatus>() {
            Ok(status) => self.set_status(id, status),
            Err(_) => {
                warn!(
                    "event=book_status module=catalog status=rejected book_id={id} error_code=invalid_status"
                );
                Ok(StatusUpdateOutcome::InvalidStatus(raw_status.to_string()))
            }
        }
    }

    pub fn set_status(&self, id: BookId, status: BookStatus) -> RepoResult<StatusUpdateOutcome> {
        let outcome = if self.repo.set_status(id, status)? {
            StatusUpdateOutcome::Updated
        } else {
            StatusUpdateOutcome::NotFound
        };
        info!(
            "event=book_status module=catalog status=ok book_id={id} new_status={status} outcome={outcome:?}"
        );
        Ok(outcome)
    }

    /// Releases the store. The service cannot be used afterwards.
    pub fn close(self) -> RepoResult<()> {
        self.repo.close()?;
        info!("event=catalog_close module=catalog status=ok");
        Ok(())
    }
}
