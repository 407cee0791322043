//! Book record domain model.
//!
//! # Responsibility
//! - Define the persisted book record and its pre-persist draft form.
//! - Provide field validation and review/sentiment mutation helpers.
//!
//! # Invariants
//! - `uuid` is assigned once by the repository and never reused.
//! - `title` and `author` trim to a non-empty string.
//! - `sentiment` is `Some` exactly when `review` is `Some` and non-empty;
//!   every review mutation recomputes or clears it in the same call.
//! - `date_started`/`date_finished` are interpreted only when `read` is
//!   true, but are retained regardless.

use crate::sentiment::{Sentiment, SentimentClassifier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a persisted book record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// Returns whether `text` is acceptable as a book title.
///
/// True iff the input, trimmed of leading/trailing whitespace (newlines
/// included), is non-empty. Pure and total over all string inputs.
pub fn is_valid_title(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns whether `text` is acceptable as an author name.
///
/// Same rule as [`is_valid_title`], kept separate so the two fields can
/// diverge without touching call sites.
pub fn is_valid_author(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Validation failure for a book field mutation or a pre-persist check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    /// Title is empty or all-whitespace.
    EmptyTitle,
    /// Author is empty or all-whitespace.
    EmptyAuthor,
    /// Stored sentiment does not match the presence of a non-empty review.
    ReviewSentimentMismatch,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty or whitespace"),
            Self::EmptyAuthor => write!(f, "author must not be empty or whitespace"),
            Self::ReviewSentimentMismatch => {
                write!(f, "sentiment must be present exactly when a non-empty review is")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Typed field edit applied through [`Book::apply_edit`].
///
/// Title/author edits are re-validated; the remaining fields are accepted
/// unconditionally. Review edits go through [`Book::set_review`] instead,
/// since they also recompute sentiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEdit {
    Title(String),
    Author(String),
    Read(bool),
    DateStarted(NaiveDate),
    DateFinished(NaiveDate),
}

/// Caller-supplied input for creating a new record.
///
/// Mirrors the add-book form: required title/author/read/dates plus an
/// optional review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub read: bool,
    pub date_started: NaiveDate,
    pub date_finished: NaiveDate,
    pub review: Option<String>,
}

/// Persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable ID assigned by the repository at create time.
    pub uuid: BookId,
    pub title: String,
    pub author: String,
    pub read: bool,
    /// Calendar date; meaningful only when `read` is true.
    pub date_started: NaiveDate,
    /// Calendar date; meaningful only when `read` is true.
    pub date_finished: NaiveDate,
    /// Free-text review; `None` means no review was written.
    pub review: Option<String>,
    /// Derived from `review` in the same mutation that sets it.
    pub sentiment: Option<Sentiment>,
}

/// A [`Book`] minus its identity: the shape `create` produces before the
/// repository assigns an ID on persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub read: bool,
    pub date_started: NaiveDate,
    pub date_finished: NaiveDate,
    pub review: Option<String>,
    pub sentiment: Option<Sentiment>,
}

impl BookDraft {
    /// Builds a validated draft from caller input.
    ///
    /// Computes sentiment through `classifier` when a non-empty review is
    /// supplied. Fails without side effects when title or author is
    /// invalid; the caller must not proceed to persistence.
    pub fn from_new(
        new: NewBook,
        classifier: &SentimentClassifier,
    ) -> Result<Self, BookValidationError> {
        if !is_valid_title(&new.title) {
            return Err(BookValidationError::EmptyTitle);
        }
        if !is_valid_author(&new.author) {
            return Err(BookValidationError::EmptyAuthor);
        }

        let sentiment = derive_sentiment(new.review.as_deref(), classifier);
        Ok(Self {
            title: new.title,
            author: new.author,
            read: new.read,
            date_started: new.date_started,
            date_finished: new.date_finished,
            review: new.review,
            sentiment,
        })
    }

    /// Checks the at-rest invariants without mutating the draft.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_fields(
            &self.title,
            &self.author,
            self.review.as_deref(),
            self.sentiment,
        )
    }

    /// Promotes the draft to a full record under a repository-assigned ID.
    pub fn into_book(self, uuid: BookId) -> Book {
        Book {
            uuid,
            title: self.title,
            author: self.author,
            read: self.read,
            date_started: self.date_started,
            date_finished: self.date_finished,
            review: self.review,
            sentiment: self.sentiment,
        }
    }
}

impl Book {
    /// Checks the at-rest invariants.
    ///
    /// Repository write paths call this before any storage mutation, and
    /// read paths call it on rows loaded from storage.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_fields(
            &self.title,
            &self.author,
            self.review.as_deref(),
            self.sentiment,
        )
    }

    /// Applies a single typed field edit.
    ///
    /// Title/author values are re-validated; on rejection the prior value
    /// is left untouched. `read` and the two dates are accepted
    /// unconditionally.
    pub fn apply_edit(&mut self, edit: BookEdit) -> Result<(), BookValidationError> {
        match edit {
            BookEdit::Title(title) => {
                if !is_valid_title(&title) {
                    return Err(BookValidationError::EmptyTitle);
                }
                self.title = title;
            }
            BookEdit::Author(author) => {
                if !is_valid_author(&author) {
                    return Err(BookValidationError::EmptyAuthor);
                }
                self.author = author;
            }
            BookEdit::Read(read) => self.read = read,
            BookEdit::DateStarted(date) => self.date_started = date,
            BookEdit::DateFinished(date) => self.date_finished = date,
        }
        Ok(())
    }

    /// Replaces the review, recomputing or clearing sentiment in the same
    /// mutation.
    ///
    /// Non-empty text is scored through `classifier`; `None` or empty text
    /// clears the stored sentiment. Pure mutation, no I/O; the caller
    /// persists the record afterwards.
    pub fn set_review(&mut self, review: Option<String>, classifier: &SentimentClassifier) {
        self.sentiment = derive_sentiment(review.as_deref(), classifier);
        self.review = review;
    }

    /// Returns whether this record currently carries a non-empty review.
    pub fn has_review(&self) -> bool {
        self.review.as_deref().is_some_and(|text| !text.is_empty())
    }
}

fn derive_sentiment(
    review: Option<&str>,
    classifier: &SentimentClassifier,
) -> Option<Sentiment> {
    match review {
        Some(text) if !text.is_empty() => Some(classifier.analyze(text)),
        _ => None,
    }
}

fn validate_fields(
    title: &str,
    author: &str,
    review: Option<&str>,
    sentiment: Option<Sentiment>,
) -> Result<(), BookValidationError> {
    if !is_valid_title(title) {
        return Err(BookValidationError::EmptyTitle);
    }
    if !is_valid_author(author) {
        return Err(BookValidationError::EmptyAuthor);
    }

    let has_review = review.is_some_and(|text| !text.is_empty());
    if sentiment.is_some() != has_review {
        return Err(BookValidationError::ReviewSentimentMismatch);
    }

    Ok(())
}
