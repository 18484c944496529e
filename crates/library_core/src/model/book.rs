//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record and its availability status.
//! - Validate records before they reach persistence.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one, and never reused afterwards.
//! - `status` is always one of the two `BookStatus` values.
//! - `title` and `author` are non-empty after trimming.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned row identifier.
pub type BookId = i64;

/// Availability of a catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf. Every new record starts here.
    #[default]
    Available,
    /// Lent out.
    CheckedOut,
}

impl BookStatus {
    /// Text stored in `books.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked_out",
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = BookValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "available" => Ok(Self::Available),
            "checked_out" => Ok(Self::CheckedOut),
            _ => Err(BookValidationError::InvalidStatus(value.to_string())),
        }
    }
}

/// Validation failures for book input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    /// Status text outside `available` / `checked_out`.
    InvalidStatus(String),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::EmptyAuthor => write!(f, "author cannot be empty"),
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; expected `available` or `checked_out`"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the store on insert.
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    /// Publication year. Not range-checked.
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    /// Creates an unsaved record with status `available`.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }

    /// Checks the field-level invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyAuthor` when the text is blank after trimming.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(())
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Identity comparison: two persisted records are the same entry when
    /// their ids match, regardless of the other fields.
    pub fn same_record(&self, other: &Book) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{id}: ")?,
            None => write!(f, "-: ")?,
        }
        write!(
            f,
            "{} - {} ({}) [{}]",
            self.title, self.author, self.year, self.status
        )
    }
}
