//! Bundled lexicon-based polarity model.
//!
//! # Responsibility
//! - Score review text by case-insensitive word lookup over a fixed
//!   word/intensity table.
//! - Ship a default table tuned to common book-review vocabulary.
//!
//! # Invariants
//! - Stored word intensities stay within `[-1.0, 1.0]`.
//! - Scoring normalizes by matched-word count, so verbosity alone does not
//!   inflate polarity.

use super::SentimentModel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("valid word regex"));

/// Word-list polarity scorer.
///
/// Words map to intensities in `[-1.0, 1.0]`; positive values mean
/// favorable tone. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f32>,
}

impl SentimentLexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Adds a favorable word with intensity clamped to `[0.0, 1.0]`.
    pub fn add_positive(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), intensity.clamp(0.0, 1.0));
    }

    /// Adds an unfavorable word with intensity clamped to `[0.0, 1.0]`,
    /// stored negated.
    pub fn add_negative(&mut self, word: &str, intensity: f32) {
        self.words
            .insert(word.to_lowercase(), -intensity.clamp(0.0, 1.0));
    }

    /// Returns the stored intensity for `word`, if present.
    pub fn word_score(&self, word: &str) -> Option<f32> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SentimentModel for SentimentLexicon {
    /// Net polarity of `text` taken as one paragraph.
    ///
    /// Tokenizes on letter runs (apostrophes kept), sums matched word
    /// intensities and normalizes by the matched count, clamped to
    /// `[-1.0, 1.0]`. Text with no matched words scores `0.0`.
    fn polarity(&self, text: &str) -> f32 {
        let mut sum = 0.0_f32;
        let mut matched = 0u32;

        for token in WORD_RE.find_iter(text) {
            if let Some(score) = self.word_score(token.as_str()) {
                sum += score;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }
        (sum / matched as f32).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentLexicon {
    /// Lexicon covering common book-review vocabulary.
    fn default() -> Self {
        let mut lexicon = Self::new();

        for word in [
            "loved", "love", "amazing", "wonderful", "brilliant", "excellent",
            "masterpiece", "fantastic", "beautiful", "stunning", "superb",
            "unforgettable", "perfect",
        ] {
            lexicon.add_positive(word, 0.9);
        }

        for word in [
            "enjoyed", "great", "good", "compelling", "engaging", "gripping",
            "charming", "delightful", "moving", "touching", "clever",
            "satisfying", "vivid", "witty", "captivating", "memorable",
        ] {
            lexicon.add_positive(word, 0.6);
        }

        for word in [
            "fine", "decent", "solid", "pleasant", "interesting", "likable",
            "readable", "promising", "okay",
        ] {
            lexicon.add_positive(word, 0.3);
        }

        for word in [
            "hated", "hate", "terrible", "awful", "horrible", "dreadful",
            "unreadable", "atrocious", "insufferable", "abysmal",
        ] {
            lexicon.add_negative(word, 0.9);
        }

        for word in [
            "bad", "boring", "disappointing", "dull", "tedious", "frustrating",
            "annoying", "weak", "bland", "predictable", "shallow", "confusing",
            "contrived", "messy",
        ] {
            lexicon.add_negative(word, 0.6);
        }

        for word in [
            "slow", "uneven", "flat", "mediocre", "underwhelming", "overlong",
            "repetitive", "forgettable",
        ] {
            lexicon.add_negative(word, 0.3);
        }

        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::SentimentLexicon;
    use crate::sentiment::SentimentModel;

    #[test]
    fn matching_is_case_insensitive() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.word_score("LOVED"), lexicon.word_score("loved"));
        assert!(lexicon.word_score("loved").unwrap() > 0.0);
    }

    #[test]
    fn unmatched_text_scores_zero() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.polarity("the quick brown fox"), 0.0);
        assert_eq!(lexicon.polarity(""), 0.0);
    }

    #[test]
    fn normalization_keeps_score_in_range() {
        let lexicon = SentimentLexicon::default();
        let score = lexicon.polarity("amazing amazing amazing amazing amazing");
        assert!(score > 0.3);
        assert!(score <= 1.0);
    }

    #[test]
    fn mixed_text_balances_out() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.add_positive("up", 0.6);
        lexicon.add_negative("down", 0.6);
        assert_eq!(lexicon.polarity("up and down"), 0.0);
    }

    #[test]
    fn intensities_are_clamped() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.add_positive("huge", 7.0);
        assert_eq!(lexicon.word_score("huge"), Some(1.0));
    }
}
