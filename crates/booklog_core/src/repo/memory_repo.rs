//! In-memory reference repository.
//!
//! # Responsibility
//! - Satisfy the [`BookRepository`] contract without any I/O, for tests
//!   and for callers that do not need durability.
//!
//! # Invariants
//! - Identical contract semantics to the SQLite implementation: validated
//!   writes, `NotFound` on unknown IDs, deterministic list ordering.

use crate::model::book::{Book, BookDraft, BookId};
use crate::repo::book_repo::{BookListQuery, BookRepository, RepoError, RepoResult, SortField};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Map-backed repository; every operation completes synchronously.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<HashMap<BookId, Book>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BookId, Book>> {
        // A poisoned lock only means a panic elsewhere mid-read; the map
        // itself is always left in a consistent state.
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookRepository for MemoryBookRepository {
    fn create(&self, draft: &BookDraft) -> RepoResult<BookId> {
        draft.validate()?;

        let uuid = Uuid::new_v4();
        self.lock().insert(uuid, draft.clone().into_book(uuid));
        Ok(uuid)
    }

    fn update(&self, book: &Book) -> RepoResult<()> {
        book.validate()?;

        let mut books = self.lock();
        match books.get_mut(&book.uuid) {
            Some(stored) => {
                *stored = book.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(book.uuid)),
        }
    }

    fn delete(&self, id: BookId) -> RepoResult<()> {
        match self.lock().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn get(&self, id: BookId) -> RepoResult<Book> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn list(&self, query: &BookListQuery) -> RepoResult<Vec<Book>> {
        let mut books: Vec<Book> = self.lock().values().cloned().collect();
        let ascending = query.ascending;
        let sort = query.sort;

        books.sort_by(|a, b| {
            let primary = compare_by(a, b, sort);
            let primary = if ascending { primary } else { primary.reverse() };
            primary.then_with(|| a.uuid.cmp(&b.uuid))
        });

        Ok(books)
    }
}

fn compare_by(a: &Book, b: &Book, sort: SortField) -> Ordering {
    match sort {
        SortField::DateStarted => a.date_started.cmp(&b.date_started),
        // Case-insensitive, matching the SQLite NOCASE collation.
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
    }
}
