//! Domain model for the reading log.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Enforce field validation and review/sentiment consistency.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `BookId`.
//! - `title` and `author` are never empty or all-whitespace at rest.
//! - `sentiment` is present exactly when `review` is present and non-empty.

pub mod book;
