//! Weak vocabulary detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::StyleProfile;
use crate::suggestion::Category;
use crate::text::{self, Document};
use crate::word_lists::{WEAK_WORDS, WeakWord};

use super::{Detector, Finding};

/// How many alternatives a suggestion lists.
pub const ALTERNATIVES_SHOWN: usize = 3;

/// Whole-word, case-insensitive pattern for each weak word.
static WEAK_WORD_PATTERNS: LazyLock<Vec<(&'static WeakWord, Regex)>> = LazyLock::new(|| {
    WEAK_WORDS
        .iter()
        .map(|weak| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(weak.word));
            (weak, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

pub(super) const DETECTOR: Detector = Detector {
    name: "vocabulary",
    id_prefix: "vocab",
    category: Category::Vocabulary,
    confidence: 0.65,
    scan,
};

fn scan(doc: &Document<'_>, _profile: &StyleProfile) -> Vec<Finding> {
    let text = doc.text();
    WEAK_WORD_PATTERNS
        .iter()
        .filter_map(|(weak, pattern)| {
            let m = pattern.find(text)?;
            let shown: Vec<&str> = weak
                .alternatives
                .iter()
                .take(ALTERNATIVES_SHOWN)
                .copied()
                .collect();
            Some(Finding {
                key: weak.word.to_string(),
                offset: text::char_offset(text, m.start()),
                original: weak.word.to_string(),
                suggestion: format!("Try: {}", shown.join(", ")),
                reason: format!(
                    "{} is quite common. Consider stronger alternatives.",
                    weak.word
                ),
            })
        })
        .collect()
}
