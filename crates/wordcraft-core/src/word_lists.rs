//! Curated word lists for the suggestion detectors.
//!
//! Genre cliché phrases and the weak-word thesaurus. All tables are
//! read-only; detectors receive them by reference.

use crate::profile::Genre;

/// Overused phrases for general fiction.
pub const FICTION_CLICHES: &[&str] = &[
    "it was a dark and stormy night",
    "little did she know",
    "at the end of the day",
    "needless to say",
];

/// Overused phrases for romance.
pub const ROMANCE_CLICHES: &[&str] = &[
    "heart racing",
    "breath taken away",
    "butterflies in stomach",
    "swept off her feet",
];

/// Overused phrases for mystery.
pub const MYSTERY_CLICHES: &[&str] = &[
    "clues were scattered",
    "mystery unfolded",
    "deep dark secret",
    "truth came to light",
];

/// Cliché phrases to scan for in a given genre.
///
/// Genres without a curated list yield an empty slice.
pub const fn cliches_for(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Fiction => FICTION_CLICHES,
        Genre::Romance => ROMANCE_CLICHES,
        Genre::Mystery => MYSTERY_CLICHES,
        Genre::SciFi | Genre::Fantasy | Genre::NonFiction | Genre::Unknown => &[],
    }
}

/// A common word paired with stronger alternatives, best first.
#[derive(Debug, Clone, Copy)]
pub struct WeakWord {
    /// The weak word, lowercase.
    pub word: &'static str,
    /// Stronger alternatives.
    pub alternatives: &'static [&'static str],
}

/// Weak words and their alternatives, in suggestion order.
pub const WEAK_WORDS: &[WeakWord] = &[
    WeakWord {
        word: "said",
        alternatives: &["whispered", "exclaimed", "replied", "muttered", "declared"],
    },
    WeakWord {
        word: "good",
        alternatives: &["excellent", "superb", "outstanding", "remarkable", "exceptional"],
    },
    WeakWord {
        word: "bad",
        alternatives: &["poor", "terrible", "awful", "dreadful", "abysmal"],
    },
    WeakWord {
        word: "happy",
        alternatives: &["delighted", "elated", "cheerful", "content", "thrilled"],
    },
    WeakWord {
        word: "sad",
        alternatives: &["melancholy", "sorrowful", "dejected", "despondent", "forlorn"],
    },
];
