//! Book use-case service.
//!
//! # Responsibility
//! - Provide the command surface presentation layers call: add, edit,
//!   review, delete, list.
//! - Own the sentiment classifier so review mutations always recompute the
//!   stored label in the same call.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence
//!   contracts.
//! - Persistence is explicit: mutations are applied in memory first and
//!   written only through [`BookService::save_book`]. No implicit save per
//!   field edit.
//! - Review recomputation is undebounced; the command surface is per-save,
//!   so each mutation is already user-intentional.

use crate::model::book::{Book, BookDraft, BookId, NewBook};
use crate::repo::book_repo::{BookListQuery, BookRepository, RepoResult};
use crate::sentiment::SentimentClassifier;
use log::info;

/// Use-case facade over a repository implementation and a sentiment
/// classifier.
pub struct BookService<R: BookRepository> {
    repo: R,
    classifier: SentimentClassifier,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service with the bundled lexicon classifier.
    pub fn new(repo: R) -> Self {
        Self::with_classifier(repo, SentimentClassifier::new())
    }

    /// Creates a service with a caller-supplied classifier.
    pub fn with_classifier(repo: R, classifier: SentimentClassifier) -> Self {
        Self { repo, classifier }
    }

    /// Validates caller input, persists it, and returns the stored record.
    ///
    /// Sentiment is computed synchronously when a non-empty review is
    /// supplied. A validation failure returns before any repository call;
    /// the caller re-prompts instead of retrying automatically.
    pub fn add_book(&self, new: NewBook) -> RepoResult<Book> {
        let draft = BookDraft::from_new(new, &self.classifier)?;
        let id = self.repo.create(&draft)?;
        let book = self.repo.get(id)?;
        info!("event=book_added module=service status=ok id={id}");
        Ok(book)
    }

    /// Replaces the record's review, recomputing or clearing its
    /// sentiment.
    ///
    /// Pure mutation; persist afterwards with [`BookService::save_book`].
    pub fn update_review(&self, book: &mut Book, review: Option<String>) {
        book.set_review(review, &self.classifier);
    }

    /// Persists the current state of an already-created record.
    pub fn save_book(&self, book: &Book) -> RepoResult<()> {
        self.repo.update(book)
    }

    /// Loads one record by ID.
    pub fn get_book(&self, id: BookId) -> RepoResult<Book> {
        self.repo.get(id)
    }

    /// Lists records in the requested order.
    pub fn list_books(&self, query: &BookListQuery) -> RepoResult<Vec<Book>> {
        self.repo.list(query)
    }

    /// Hard-deletes one record by ID.
    pub fn delete_book(&self, id: BookId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!("event=book_deleted module=service status=ok id={id}");
        Ok(())
    }
}
