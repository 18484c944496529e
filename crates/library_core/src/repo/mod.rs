//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define statement-level data access contracts for the catalog.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Book::validate()` before persistence.
//! - A missing row is reported as an affected-row count, not an error.

pub mod book_repo;
