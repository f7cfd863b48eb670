//! Lexical statistics over a segmented document.

use crate::text::Document;

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts and averages derived from a [`Document`].
///
/// Averages are rounded to one decimal for display. The readability scorer
/// works from the unrounded values via [`LexicalStats::mean_word_length`] and
/// [`LexicalStats::mean_sentence_length`].
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalStats {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Characters in the whole text, whitespace included.
    pub character_count: usize,
    /// Sentences, as split by [`crate::text::split_sentences`].
    pub sentence_count: usize,
    /// Paragraphs, as split by [`crate::text::split_paragraphs`].
    pub paragraph_count: usize,
    /// Mean word length in characters, one decimal.
    pub avg_word_length: f64,
    /// Mean words per sentence, one decimal.
    pub avg_sentence_length: f64,
    /// `ceil(word_count / 200)`.
    pub reading_time_minutes: usize,
    word_chars: usize,
}

impl LexicalStats {
    /// Compute statistics for a document.
    #[tracing::instrument(skip_all, fields(words = doc.words().len()))]
    pub fn compute(doc: &Document<'_>) -> Self {
        let word_count = doc.words().len();
        let word_chars = doc.words().iter().map(|w| w.chars().count()).sum();

        let mut stats = Self {
            word_count,
            character_count: doc.text().chars().count(),
            sentence_count: doc.sentences().len(),
            paragraph_count: doc.paragraphs().len(),
            avg_word_length: 0.0,
            avg_sentence_length: 0.0,
            reading_time_minutes: reading_time_minutes(word_count),
            word_chars,
        };
        stats.avg_word_length = round1(stats.mean_word_length());
        stats.avg_sentence_length = round1(stats.mean_sentence_length());
        stats
    }

    /// Unrounded mean word length; zero for an empty document.
    pub fn mean_word_length(&self) -> f64 {
        self.word_chars as f64 / self.word_count.max(1) as f64
    }

    /// Unrounded words per sentence, with the sentence count floored at one.
    pub fn mean_sentence_length(&self) -> f64 {
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }
}

/// Minutes needed to read `word_count` words, rounded up.
pub const fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
