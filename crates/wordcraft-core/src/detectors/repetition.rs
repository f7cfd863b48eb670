//! Repeated word detection.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::profile::StyleProfile;
use crate::suggestion::Category;
use crate::text::{self, Document};

use super::{Detector, Finding};

/// Words must be longer than this (after cleanup) to be counted.
pub const MIN_WORD_LEN: usize = 4;

/// A word is flagged when it appears more than this many times.
pub const MAX_REPEATS: usize = 3;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid regex"));

pub(super) const DETECTOR: Detector = Detector {
    name: "repetition",
    id_prefix: "repeat",
    category: Category::Vocabulary,
    confidence: 0.7,
    scan,
};

/// A counted word and where it first appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    /// Normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Character offset of the first occurrence.
    pub first_offset: usize,
}

/// Lower-case a word and drop everything outside `[a-z0-9]`.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Count normalized words longer than [`MIN_WORD_LEN`], in order of first
/// appearance.
pub fn word_frequencies(text: &str) -> Vec<WordFrequency> {
    let mut order: Vec<WordFrequency> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in WORD.find_iter(text) {
        let clean = normalize(m.as_str());
        if clean.len() <= MIN_WORD_LEN {
            continue;
        }
        if let Some(&i) = index.get(&clean) {
            order[i].count += 1;
        } else {
            index.insert(clean.clone(), order.len());
            order.push(WordFrequency {
                word: clean,
                count: 1,
                first_offset: text::char_offset(text, m.start()),
            });
        }
    }

    order
}

fn scan(doc: &Document<'_>, _profile: &StyleProfile) -> Vec<Finding> {
    word_frequencies(doc.text())
        .into_iter()
        .filter(|f| f.count > MAX_REPEATS)
        .map(|f| Finding {
            key: f.word.clone(),
            offset: f.first_offset,
            suggestion: format!(
                "\"{}\" appears {} times. Consider varying your vocabulary.",
                f.word, f.count
            ),
            reason: "Word repetition can reduce reader engagement".to_string(),
            original: f.word,
        })
        .collect()
}
