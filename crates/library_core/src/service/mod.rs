//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into catalog-level operations.
//! - Keep the shell decoupled from storage details.

pub mod catalog_service;
