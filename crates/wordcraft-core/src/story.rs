//! Length-based story advice and word-count goals.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drafts shorter than this are short stories.
pub const NOVELLA_MIN_WORDS: usize = 5_000;

/// Drafts shorter than this (and not short stories) are novellas.
pub const NOVEL_MIN_WORDS: usize = 50_000;

/// Default session word goal.
pub const DEFAULT_WORD_GOAL: usize = 2_000;

/// Story format implied by a word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StoryFormat {
    /// Under 5,000 words.
    ShortStory,
    /// 5,000 up to 50,000 words.
    Novella,
    /// 50,000 words and up.
    Novel,
}

impl StoryFormat {
    /// Classify a draft by word count.
    pub const fn from_word_count(words: usize) -> Self {
        if words < NOVELLA_MIN_WORDS {
            Self::ShortStory
        } else if words < NOVEL_MIN_WORDS {
            Self::Novella
        } else {
            Self::Novel
        }
    }

    /// Display name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ShortStory => "Short story",
            Self::Novella => "Novella",
            Self::Novel => "Novel",
        }
    }

    /// Structural advice for this format.
    pub const fn recommendations(&self) -> [&'static str; 4] {
        match self {
            Self::ShortStory => [
                "Short story format - focus on single compelling incident",
                "Compress timeline - tight pacing essential",
                "Limited character scope - 2-4 main characters recommended",
                "Simple plot - avoid multiple subplots",
            ],
            Self::Novella => [
                "Novella format - room for deeper character development",
                "Single subplot acceptable - build complexity gradually",
                "Multiple perspectives possible - 3-5 characters",
                "Full story arc recommended - exposition, conflict, resolution",
            ],
            Self::Novel => [
                "Novel length - complex story structures optimal",
                "Multiple subplots supported - interweave character arcs",
                "Large cast possible - 6+ characters with distinct arcs",
                "Epic scope achievable - consider multiple POVs",
            ],
        }
    }

    /// Where a draft of this length tends to be published.
    pub const fn publication_ideas(&self) -> [&'static str; 3] {
        match self {
            Self::ShortStory => ["Flash fiction", "Short story", "Microfiction challenges"],
            Self::Novella => ["Short story collection", "Novella", "Serialized episodes"],
            Self::Novel => ["Full novel", "Book series starter", "Multi-POV narrative"],
        }
    }
}

impl fmt::Display for StoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advice for a draft, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StoryAdvice {
    /// Detected format.
    pub format: StoryFormat,
    /// Structural recommendations.
    pub recommendations: Vec<String>,
    /// Publication ideas.
    pub publication_ideas: Vec<String>,
}

impl StoryAdvice {
    /// Advice for a draft of `words` words.
    pub fn for_word_count(words: usize) -> Self {
        let format = StoryFormat::from_word_count(words);
        Self {
            format,
            recommendations: format.recommendations().map(String::from).to_vec(),
            publication_ideas: format.publication_ideas().map(String::from).to_vec(),
        }
    }
}

/// Progress toward a target word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGoal {
    /// Target word count.
    pub target: usize,
}

impl Default for WordGoal {
    fn default() -> Self {
        Self {
            target: DEFAULT_WORD_GOAL,
        }
    }
}

impl WordGoal {
    /// A goal of `target` words.
    pub const fn new(target: usize) -> Self {
        Self { target }
    }

    /// Percent of the goal reached, rounded and capped at 100.
    ///
    /// A zero target counts as already met.
    pub fn progress(&self, words: usize) -> u8 {
        if self.target == 0 {
            return 100;
        }
        let percent = (words as f64 / self.target as f64 * 100.0).round();
        // capped before the cast
        percent.min(100.0) as u8
    }

    /// Words still needed, zero once the goal is met.
    pub const fn remaining(&self, words: usize) -> usize {
        self.target.saturating_sub(words)
    }
}
