//! Core domain logic for the Booklog reading log.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sentiment;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{
    is_valid_author, is_valid_title, Book, BookDraft, BookEdit, BookId, BookValidationError,
    NewBook,
};
pub use repo::book_repo::{
    BookListQuery, BookRepository, RepoError, RepoResult, SortField, SqliteBookRepository,
};
pub use repo::memory_repo::MemoryBookRepository;
pub use sentiment::{Sentiment, SentimentClassifier, SentimentLexicon, SentimentModel};
pub use service::book_service::BookService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
