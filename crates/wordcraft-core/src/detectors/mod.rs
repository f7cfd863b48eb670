//! Heuristic pattern detectors.
//!
//! Each detector is a pure scan over a [`Document`] that reports
//! [`Finding`]s. The [`DETECTORS`] table pairs every scan with its category
//! and fixed confidence, and fixes the order in which detectors contribute
//! to the suggestion list:
//!
//! | detector     | id                  | category   | confidence |
//! |--------------|---------------------|------------|------------|
//! | `passive`    | `passive-<offset>`  | style      | 0.85       |
//! | `repetition` | `repeat-<word>`     | vocabulary | 0.70       |
//! | `pacing`     | `sentence-length`   | pacing     | 0.80       |
//! | `cliche`     | `cliche-<phrase>`   | tone       | 0.75       |
//! | `vocabulary` | `vocab-<word>`      | vocabulary | 0.65       |
//!
//! Adding a heuristic means writing a scan function and adding a row.

pub mod cliches;
pub mod pacing;
pub mod passive;
pub mod repetition;
pub mod vocabulary;

use crate::profile::StyleProfile;
use crate::suggestion::{Category, Suggestion};
use crate::text::Document;

pub use pacing::count_complex_sentences;
pub use passive::{PassiveMatch, find_passive_voice};

/// One raw hit reported by a detector scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Distinguishes hits of the same detector; appended to the id prefix.
    /// Empty for detectors that report at most once.
    pub key: String,
    /// Character offset of the hit, or 0 when not localized.
    pub offset: usize,
    /// The flagged text.
    pub original: String,
    /// Suggested change.
    pub suggestion: String,
    /// Why the text was flagged.
    pub reason: String,
}

/// Signature shared by every detector scan.
pub type ScanFn = fn(&Document<'_>, &StyleProfile) -> Vec<Finding>;

/// A row of the detector table.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    /// Detector name, used in logs.
    pub name: &'static str,
    /// Prefix of every suggestion id this detector emits.
    pub id_prefix: &'static str,
    /// Category assigned to every suggestion.
    pub category: Category,
    /// Confidence assigned to every suggestion.
    pub confidence: f64,
    /// The scan itself.
    pub scan: ScanFn,
}

impl Detector {
    /// Run the scan and turn its findings into suggestions.
    pub fn run(&self, doc: &Document<'_>, profile: &StyleProfile) -> Vec<Suggestion> {
        let findings = (self.scan)(doc, profile);
        tracing::debug!(detector = self.name, hits = findings.len(), "detector finished");
        findings
            .into_iter()
            .map(|finding| Suggestion {
                id: if finding.key.is_empty() {
                    self.id_prefix.to_string()
                } else {
                    format!("{}-{}", self.id_prefix, finding.key)
                },
                category: self.category,
                offset: finding.offset,
                original: finding.original,
                suggestion: finding.suggestion,
                reason: finding.reason,
                confidence: self.confidence,
            })
            .collect()
    }
}

/// All detectors, in suggestion order.
pub static DETECTORS: &[Detector] = &[
    passive::DETECTOR,
    repetition::DETECTOR,
    pacing::DETECTOR,
    cliches::DETECTOR,
    vocabulary::DETECTOR,
];

/// Look up a detector by name.
pub fn detector(name: &str) -> Option<&'static Detector> {
    DETECTORS.iter().find(|d| d.name == name)
}

/// Run every detector, returning one suggestion list per table row.
#[tracing::instrument(skip_all, fields(text_len = doc.text().len(), genre = %profile.genre))]
pub fn run_all(doc: &Document<'_>, profile: &StyleProfile) -> Vec<Vec<Suggestion>> {
    DETECTORS.iter().map(|d| d.run(doc, profile)).collect()
}
