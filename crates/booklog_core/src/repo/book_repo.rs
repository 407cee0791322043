//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and list APIs over `books` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `create` assigns the record ID; callers never supply one.

use crate::db::DbError;
use crate::model::book::{Book, BookDraft, BookId, BookValidationError};
use crate::sentiment::Sentiment;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const BOOK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    author,
    read,
    date_started,
    date_finished,
    review,
    sentiment
FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Record failed validation before a write; nothing was persisted.
    Validation(BookValidationError),
    /// Storage-level failure; the caller may retry the whole operation.
    Db(DbError),
    /// Unknown record ID; surfaced rather than silently ignored.
    NotFound(BookId),
    /// Persisted row no longer parses as a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Sort key for [`BookRepository::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    DateStarted,
    Title,
    Author,
}

/// Query options for listing books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookListQuery {
    pub sort: SortField,
    pub ascending: bool,
}

impl Default for BookListQuery {
    /// Date-started ascending, matching the library screen's default order.
    fn default() -> Self {
        Self {
            sort: SortField::DateStarted,
            ascending: true,
        }
    }
}

/// Repository interface for book CRUD operations.
///
/// Any conforming storage satisfies the core: see
/// [`SqliteBookRepository`] and
/// [`MemoryBookRepository`](crate::repo::memory_repo::MemoryBookRepository).
/// The core performs no retries; every error is scoped to the single
/// operation that produced it.
pub trait BookRepository {
    /// Persists a validated draft under a freshly assigned ID.
    fn create(&self, draft: &BookDraft) -> RepoResult<BookId>;
    /// Replaces the stored record matching `book.uuid`.
    fn update(&self, book: &Book) -> RepoResult<()>;
    /// Hard-deletes the record; `NotFound` on unknown ID.
    fn delete(&self, id: BookId) -> RepoResult<()>;
    /// Loads one record; `NotFound` on unknown ID.
    fn get(&self, id: BookId) -> RepoResult<Book>;
    /// Lists all records in the requested order, ties broken by ID.
    fn list(&self, query: &BookListQuery) -> RepoResult<Vec<Book>>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn create(&self, draft: &BookDraft) -> RepoResult<BookId> {
        draft.validate()?;

        let uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO books (
                uuid,
                title,
                author,
                read,
                date_started,
                date_finished,
                review,
                sentiment
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                uuid.to_string(),
                draft.title.as_str(),
                draft.author.as_str(),
                bool_to_int(draft.read),
                draft.date_started,
                draft.date_finished,
                draft.review.as_deref(),
                draft.sentiment.map(sentiment_to_db),
            ],
        )?;

        Ok(uuid)
    }

    fn update(&self, book: &Book) -> RepoResult<()> {
        book.validate()?;

        let changed = self.conn.execute(
            "UPDATE books
             SET
                title = ?1,
                author = ?2,
                read = ?3,
                date_started = ?4,
                date_finished = ?5,
                review = ?6,
                sentiment = ?7,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?8;",
            params![
                book.title.as_str(),
                book.author.as_str(),
                bool_to_int(book.read),
                book.date_started,
                book.date_finished,
                book.review.as_deref(),
                book.sentiment.map(sentiment_to_db),
                book.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(book.uuid));
        }

        Ok(())
    }

    fn delete(&self, id: BookId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get(&self, id: BookId) -> RepoResult<Book> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => parse_book_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn list(&self, query: &BookListQuery) -> RepoResult<Vec<Book>> {
        let direction = if query.ascending { "ASC" } else { "DESC" };
        let sql = format!(
            "{BOOK_SELECT_SQL} ORDER BY {} {direction}, uuid ASC;",
            sort_column(query.sort)
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in books.uuid"))
    })?;

    let read = match row.get::<_, i64>("read")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid read value `{other}` in books.read"
            )));
        }
    };

    let date_started = parse_date(row, "date_started")?;
    let date_finished = parse_date(row, "date_finished")?;

    let sentiment = match row.get::<_, Option<String>>("sentiment")? {
        Some(value) => Some(parse_sentiment(&value).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid sentiment value `{value}` in books.sentiment"
            ))
        })?),
        None => None,
    };

    let book = Book {
        uuid,
        title: row.get("title")?,
        author: row.get("author")?,
        read,
        date_started,
        date_finished,
        review: row.get("review")?,
        sentiment,
    };
    book.validate()?;
    Ok(book)
}

fn parse_date(row: &Row<'_>, column: &str) -> RepoResult<NaiveDate> {
    let text: String = row.get(column)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
        RepoError::InvalidData(format!("invalid date value `{text}` in books.{column}"))
    })
}

fn sort_column(sort: SortField) -> &'static str {
    match sort {
        SortField::DateStarted => "date_started",
        SortField::Title => "title COLLATE NOCASE",
        SortField::Author => "author COLLATE NOCASE",
    }
}

fn sentiment_to_db(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
        Sentiment::Neutral => "neutral",
    }
}

fn parse_sentiment(value: &str) -> Option<Sentiment> {
    match value {
        "positive" => Some(Sentiment::Positive),
        "negative" => Some(Sentiment::Negative),
        "neutral" => Some(Sentiment::Neutral),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
