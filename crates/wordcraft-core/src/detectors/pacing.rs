//! Sentence length checks: the pacing suggestion and the complex-sentence tally.

use crate::profile::StyleProfile;
use crate::suggestion::Category;
use crate::text::{self, Document};

use super::{Detector, Finding};

/// A sentence with more words than this counts as complex.
pub const COMPLEX_SENTENCE_WORDS: usize = 20;

/// Mean words per sentence above which a pacing suggestion is emitted.
pub const LONG_AVERAGE_WORDS: f64 = 20.0;

pub(super) const DETECTOR: Detector = Detector {
    name: "pacing",
    id_prefix: "sentence-length",
    category: Category::Pacing,
    confidence: 0.8,
    scan,
};

/// Mean of the per-sentence word counts, or `None` when there are no sentences.
pub fn mean_sentence_words(doc: &Document<'_>) -> Option<f64> {
    let sentences = doc.sentences();
    if sentences.is_empty() {
        return None;
    }
    let total: usize = sentences.iter().map(|s| text::sentence_word_count(s)).sum();
    Some(total as f64 / sentences.len() as f64)
}

/// Number of sentences longer than [`COMPLEX_SENTENCE_WORDS`].
pub fn count_complex_sentences(doc: &Document<'_>) -> usize {
    doc.sentences()
        .iter()
        .filter(|s| text::sentence_word_count(s) > COMPLEX_SENTENCE_WORDS)
        .count()
}

fn scan(doc: &Document<'_>, _profile: &StyleProfile) -> Vec<Finding> {
    match mean_sentence_words(doc) {
        Some(mean) if mean > LONG_AVERAGE_WORDS => vec![Finding {
            key: String::new(),
            offset: 0,
            original: "Long sentences".to_string(),
            suggestion: "Average sentence length is quite long. \
                         Vary with shorter sentences for better pacing."
                .to_string(),
            reason: "Long sentences can tire readers".to_string(),
        }],
        _ => Vec::new(),
    }
}
