//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the core depends on.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce record validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - IDs are assigned by the repository at create time and never change.

pub mod book_repo;
pub mod memory_repo;
