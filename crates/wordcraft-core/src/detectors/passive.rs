//! Passive voice detection.
//!
//! Matches an auxiliary (`was`, `were`, `is`, `are`, `be`) followed by a past
//! participle: a word ending in `-ed`, `been`, or a known irregular
//! participle such as "thrown". Matching is case-insensitive and every match
//! is reported with its character offset.

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::irregular_verbs::IRREGULAR_PAST_PARTICIPLES;
use crate::profile::StyleProfile;
use crate::suggestion::Category;
use crate::text::{self, Document};

use super::{Detector, Finding};

/// Auxiliary + participle, with the irregular participles spelled out.
static PASSIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let irregular = IRREGULAR_PAST_PARTICIPLES.join("|");
    Regex::new(&format!(
        r"(?i)\b(?:was|were|is|are|be)\s+(?:\w+ed|been|{irregular})\b"
    ))
    .expect("valid regex")
});

pub(super) const DETECTOR: Detector = Detector {
    name: "passive",
    id_prefix: "passive",
    category: Category::Style,
    confidence: 0.85,
    scan,
};

/// A detected passive construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveMatch {
    /// Character offset of the auxiliary verb.
    pub offset: usize,
    /// The matched text (e.g. "was thrown").
    pub text: String,
}

/// Find every passive construction in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn find_passive_voice(text: &str) -> Vec<PassiveMatch> {
    PASSIVE_PATTERN
        .find_iter(text)
        .map(|m| PassiveMatch {
            offset: text::char_offset(text, m.start()),
            text: m.as_str().to_string(),
        })
        .collect()
}

fn scan(doc: &Document<'_>, _profile: &StyleProfile) -> Vec<Finding> {
    find_passive_voice(doc.text())
        .into_iter()
        .map(|m| Finding {
            key: m.offset.to_string(),
            offset: m.offset,
            original: m.text,
            suggestion: "Consider using active voice for stronger writing".to_string(),
            reason: "Passive voice can weaken your prose".to_string(),
        })
        .collect()
}
