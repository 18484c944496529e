//! Catalog domain model.
//!
//! # Responsibility
//! - Define the record type shared by repository, service and shell.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `BookId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod book;
