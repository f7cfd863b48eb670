//! Text segmentation.
//!
//! Splits a draft into words, sentences, and paragraphs:
//!
//! - words are runs of non-whitespace
//! - sentences end at any run of `.`, `!`, or `?`
//! - paragraphs are separated by two or more line breaks
//!
//! [`Document`] performs all three splits once and is then shared by the
//! statistics, the scorer, and every detector.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of sentence-terminating punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Two or more line breaks, tolerating Windows line endings.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("valid regex"));

/// A segmented draft.
///
/// Borrows the source text; the segment slices point into it.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    words: Vec<&'a str>,
    sentences: Vec<&'a str>,
    paragraphs: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Segment `text` into words, sentences, and paragraphs.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            words: split_words(text),
            sentences: split_sentences(text),
            paragraphs: split_paragraphs(text),
        }
    }

    /// The original text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Whitespace-separated words, punctuation included.
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Trimmed, non-empty sentences.
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Trimmed, non-empty paragraphs.
    pub fn paragraphs(&self) -> &[&'a str] {
        &self.paragraphs
    }

    /// Whether the text contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split text into words on runs of whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Fragments that are empty after trimming are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of whitespace-separated words in a single sentence.
pub fn sentence_word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Convert a byte offset into `text` to a character index.
///
/// Suggestions report character positions so that callers working with
/// non-ASCII drafts can locate the span without re-encoding.
pub fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map_or_else(|| text.chars().count(), |prefix| prefix.chars().count())
}
