//! One-call draft analysis.
//!
//! [`analyze`] segments the text once, computes the readability report, runs
//! the detector table, and merges the suggestions. It is a pure function of
//! the text and the style profile: nothing is cached between calls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detectors;
use crate::profile::StyleProfile;
use crate::readability::{self, ReadabilityStats};
use crate::suggestion::{self, CategoryGroup, DEFAULT_SUGGESTION_LIMIT, Suggestion};
use crate::text::Document;

/// Suggestions and statistics for one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    /// Suggestions in detector order, capped at the summary limit.
    pub suggestions: Vec<Suggestion>,
    /// Readability statistics.
    pub stats: ReadabilityStats,
}

impl Analysis {
    /// Suggestions grouped by category for tabbed display.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        suggestion::group_by_category(&self.suggestions)
    }
}

/// Analyze a draft with the default suggestion limit.
///
/// A missing profile means the default (fiction) profile.
pub fn analyze(text: &str, profile: Option<&StyleProfile>) -> Analysis {
    analyze_with_limit(text, profile, DEFAULT_SUGGESTION_LIMIT)
}

/// Analyze a draft, keeping at most `limit` suggestions.
#[tracing::instrument(skip(text, profile), fields(text_len = text.len()))]
pub fn analyze_with_limit(text: &str, profile: Option<&StyleProfile>, limit: usize) -> Analysis {
    let doc = Document::new(text);
    if doc.is_blank() {
        tracing::debug!("blank draft, skipping detectors");
        return Analysis {
            suggestions: Vec::new(),
            stats: ReadabilityStats::empty(),
        };
    }

    let default_profile;
    let profile = match profile {
        Some(p) => p,
        None => {
            default_profile = StyleProfile::default();
            &default_profile
        }
    };

    let stats = readability::readability_stats(&doc);
    let suggestions = suggestion::aggregate(detectors::run_all(&doc, profile), limit);
    tracing::debug!(
        suggestions = suggestions.len(),
        score = stats.readability_score,
        "analysis complete"
    );

    Analysis { suggestions, stats }
}
