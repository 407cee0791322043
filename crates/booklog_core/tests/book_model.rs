use booklog_core::{
    is_valid_author, is_valid_title, Book, BookDraft, BookEdit, BookValidationError, NewBook,
    Sentiment, SentimentClassifier,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_book() -> Book {
    Book {
        uuid: Uuid::new_v4(),
        title: "Little Women".to_string(),
        author: "Louisa May Alcott".to_string(),
        read: true,
        date_started: date(2025, 9, 1),
        date_finished: date(2025, 9, 29),
        review: None,
        sentiment: None,
    }
}

#[test]
fn title_and_author_must_not_be_empty_or_whitespace() {
    assert!(is_valid_title("Little Women"));
    assert!(!is_valid_title(""));
    assert!(!is_valid_title("   "));

    assert!(is_valid_author("Louisa May Alcott"));
    assert!(!is_valid_author(""));
    assert!(!is_valid_author(" "));
}

#[test]
fn validation_is_trim_invariant() {
    for sample in ["Little Women", "  Dune  ", "\n\tMiddlemarch\n", "", "  \n "] {
        assert_eq!(is_valid_title(sample), is_valid_title(sample.trim()));
        assert_eq!(is_valid_author(sample), is_valid_author(sample.trim()));
    }
}

#[test]
fn draft_from_new_computes_sentiment_for_review() {
    let classifier = SentimentClassifier::new();
    let draft = BookDraft::from_new(
        NewBook {
            title: "Little Women".to_string(),
            author: "Louisa May Alcott".to_string(),
            read: true,
            date_started: date(2025, 9, 1),
            date_finished: date(2025, 9, 29),
            review: Some("I loved this book, it was amazing and wonderful".to_string()),
        },
        &classifier,
    )
    .unwrap();

    assert_eq!(draft.sentiment, Some(Sentiment::Positive));
    assert!(draft.validate().is_ok());
}

#[test]
fn draft_without_review_has_no_sentiment() {
    let classifier = SentimentClassifier::new();
    let draft = BookDraft::from_new(
        NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            read: false,
            date_started: date(2026, 1, 5),
            date_finished: date(2026, 1, 5),
            review: None,
        },
        &classifier,
    )
    .unwrap();

    assert_eq!(draft.sentiment, None);
    assert!(draft.validate().is_ok());
}

#[test]
fn draft_rejects_invalid_title_and_author() {
    let classifier = SentimentClassifier::new();
    let base = NewBook {
        title: "   ".to_string(),
        author: "Louisa May Alcott".to_string(),
        read: false,
        date_started: date(2025, 9, 1),
        date_finished: date(2025, 9, 1),
        review: None,
    };

    let err = BookDraft::from_new(base.clone(), &classifier).unwrap_err();
    assert_eq!(err, BookValidationError::EmptyTitle);

    let err = BookDraft::from_new(
        NewBook {
            title: "Little Women".to_string(),
            author: "\n".to_string(),
            ..base
        },
        &classifier,
    )
    .unwrap_err();
    assert_eq!(err, BookValidationError::EmptyAuthor);
}

#[test]
fn rejected_title_edit_leaves_prior_value() {
    let mut book = sample_book();

    let err = book.apply_edit(BookEdit::Title("   ".to_string())).unwrap_err();
    assert_eq!(err, BookValidationError::EmptyTitle);
    assert_eq!(book.title, "Little Women");

    let err = book.apply_edit(BookEdit::Author(String::new())).unwrap_err();
    assert_eq!(err, BookValidationError::EmptyAuthor);
    assert_eq!(book.author, "Louisa May Alcott");
}

#[test]
fn read_flag_and_dates_are_accepted_unconditionally() {
    let mut book = sample_book();

    book.apply_edit(BookEdit::Read(false)).unwrap();
    book.apply_edit(BookEdit::DateStarted(date(2024, 1, 1))).unwrap();
    book.apply_edit(BookEdit::DateFinished(date(2024, 2, 2))).unwrap();

    assert!(!book.read);
    assert_eq!(book.date_started, date(2024, 1, 1));
    assert_eq!(book.date_finished, date(2024, 2, 2));
}

#[test]
fn unread_book_retains_dates() {
    let mut book = sample_book();
    book.apply_edit(BookEdit::Read(false)).unwrap();

    // Dates stay stored even while `read` is false; no rule interprets
    // them until the flag flips back.
    assert_eq!(book.date_started, date(2025, 9, 1));
    assert_eq!(book.date_finished, date(2025, 9, 29));
    assert!(book.validate().is_ok());
}

#[test]
fn set_review_keeps_sentiment_consistent() {
    let classifier = SentimentClassifier::new();
    let mut book = sample_book();

    book.set_review(
        Some("I hated this book, it was boring and terrible".to_string()),
        &classifier,
    );
    assert_eq!(book.sentiment, Some(Sentiment::Negative));
    assert!(book.validate().is_ok());

    book.set_review(Some(String::new()), &classifier);
    assert_eq!(book.sentiment, None);
    assert!(!book.has_review());
    assert!(book.validate().is_ok());

    book.set_review(None, &classifier);
    assert_eq!(book.sentiment, None);
    assert!(book.validate().is_ok());
}

#[test]
fn validate_rejects_stale_sentiment() {
    let mut book = sample_book();
    book.sentiment = Some(Sentiment::Positive);

    assert_eq!(
        book.validate().unwrap_err(),
        BookValidationError::ReviewSentimentMismatch
    );

    book.review = Some("wonderful".to_string());
    assert!(book.validate().is_ok());

    book.sentiment = None;
    assert_eq!(
        book.validate().unwrap_err(),
        BookValidationError::ReviewSentimentMismatch
    );
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let book = Book {
        uuid: book_id,
        title: "Little Women".to_string(),
        author: "Louisa May Alcott".to_string(),
        read: true,
        date_started: date(2025, 9, 1),
        date_finished: date(2025, 9, 29),
        review: Some("wonderful".to_string()),
        sentiment: Some(Sentiment::Positive),
    };

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["uuid"], book_id.to_string());
    assert_eq!(json["title"], "Little Women");
    assert_eq!(json["author"], "Louisa May Alcott");
    assert_eq!(json["read"], true);
    assert_eq!(json["date_started"], "2025-09-01");
    assert_eq!(json["date_finished"], "2025-09-29");
    assert_eq!(json["review"], "wonderful");
    assert_eq!(json["sentiment"], "positive");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}
