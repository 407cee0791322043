//! Sentiment classification for review text.
//!
//! # Responsibility
//! - Map a block of free text to a coarse categorical label via a
//!   continuous paragraph-level polarity score.
//! - Keep the scoring model pluggable behind [`SentimentModel`] so it can
//!   be swapped without touching the book model or repositories.
//!
//! # Invariants
//! - Polarity scores stay within `[-1.0, 1.0]`; an undecidable score is
//!   reported as `0.0` and maps to `Neutral`.
//! - Classification is deterministic for identical text and model.

pub mod lexicon;

pub use lexicon::SentimentLexicon;

use serde::{Deserialize, Serialize};

/// Score above which text is labeled positive; mirrored negatively for the
/// negative label. Boundary values fall through to `Neutral`.
const POSITIVE_THRESHOLD: f32 = 0.3;

/// Coarse sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a polarity score in `[-1.0, 1.0]` to a label.
    ///
    /// Strict thresholds: exactly `±0.3` is `Neutral`, as is any
    /// non-comparable score such as NaN.
    pub fn from_polarity(score: f32) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < -POSITIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Pluggable paragraph-level polarity scorer.
///
/// Implementations score the text as a single unit and perform no I/O.
/// The default implementation is the bundled [`SentimentLexicon`]; any
/// equivalent pretrained model can stand in behind this trait.
pub trait SentimentModel {
    /// Returns a polarity score in `[-1.0, 1.0]`, `0.0` when the text
    /// carries no signal.
    fn polarity(&self, text: &str) -> f32;
}

/// Threshold classifier over a [`SentimentModel`].
///
/// Callers must not invoke it on empty review text; they clear the stored
/// sentiment instead. Invoking it anyway is defined: empty text scores
/// `0.0` and labels `Neutral`.
pub struct SentimentClassifier {
    model: Box<dyn SentimentModel>,
}

impl SentimentClassifier {
    /// Creates a classifier backed by the bundled lexicon model.
    pub fn new() -> Self {
        Self::with_model(Box::new(SentimentLexicon::default()))
    }

    /// Creates a classifier backed by a caller-supplied scoring model.
    pub fn with_model(model: Box<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Scores `text` as one paragraph and maps the score to a label.
    pub fn analyze(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.model.polarity(text))
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
