//! Suggestion records and the aggregator that merges detector output.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions shown in the summary view.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Kind of issue a suggestion addresses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Grammatical problems.
    Grammar,
    /// Sentence construction (e.g. passive voice).
    Style,
    /// Word choice and repetition.
    Vocabulary,
    /// Voice and register (e.g. clichés).
    Tone,
    /// Sentence rhythm.
    Pacing,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Grammar,
        Self::Style,
        Self::Vocabulary,
        Self::Tone,
        Self::Pacing,
    ];

    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Style => "style",
            Self::Vocabulary => "vocabulary",
            Self::Tone => "tone",
            Self::Pacing => "pacing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flagged issue in a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Stable identifier, `<detector>-<key>` (e.g. `passive-9`, `vocab-said`).
    pub id: String,
    /// Kind of issue.
    pub category: Category,
    /// Character index of the flagged span, or 0 when the issue is not localized.
    pub offset: usize,
    /// The flagged text.
    pub original: String,
    /// What to do about it.
    pub suggestion: String,
    /// Why it was flagged.
    pub reason: String,
    /// Detector confidence, 0.0 to 1.0.
    pub confidence: f64,
}

/// Merge per-detector suggestion lists and cap the result.
///
/// Lists are concatenated in the order given. No deduplication is performed:
/// the same word may be flagged by more than one detector.
pub fn aggregate<I>(batches: I, limit: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = Vec<Suggestion>>,
{
    batches.into_iter().flatten().take(limit).collect()
}

/// Suggestions sharing one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    /// The shared category.
    pub category: Category,
    /// Suggestions in their original order.
    pub suggestions: Vec<&'a Suggestion>,
}

/// Group suggestions by category, in [`Category::ALL`] order.
///
/// Categories with no suggestions are omitted.
pub fn group_by_category(suggestions: &[Suggestion]) -> Vec<CategoryGroup<'_>> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<&Suggestion> = suggestions
                .iter()
                .filter(|s| s.category == category)
                .collect();
            (!members.is_empty()).then_some(CategoryGroup {
                category,
                suggestions: members,
            })
        })
        .collect()
}
