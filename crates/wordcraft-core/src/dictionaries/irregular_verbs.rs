//! Irregular past participles for passive voice detection.
//!
//! Regular participles end in `-ed` and are matched by pattern. Irregular ones
//! ("thrown", "written", "kept") need an explicit list.
//!
//! Forms identical to the base verb or common as adjectives ("set", "put",
//! "read", "left") are left out: "is set on going" and "is left-handed" are
//! not passive.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Irregular past participles, lowercase.
pub const IRREGULAR_PAST_PARTICIPLES: &[&str] = &[
    // Most common
    "done", "gone", "seen", "known", "given", "taken", "made", "become", "written", "spoken",
    "broken", "chosen", "driven", "eaten", "fallen", "forgotten", "forgiven", "frozen", "gotten",
    "hidden", "ridden", "risen", "shaken", "shown", "stolen", "sworn", "torn", "thrown", "worn",
    "beaten", "bitten", "blown", "drawn", "flown", "grown", "withdrawn",
    // Vowel-shift forms
    "begun", "drunk", "rung", "shrunk", "sunk", "sprung", "sung", "spun", "won", "hung", "struck",
    "stuck", "swung", "flung", "stung", "strung", "wrung",
    // -en and archaic forms
    "arisen", "awoken", "borne", "forbidden", "forsaken", "mistaken", "proven", "stricken",
    "trodden", "woven", "sewn", "sown", "shorn", "slain",
    // -t and -d forms
    "bent", "bought", "brought", "built", "burnt", "caught", "dealt", "felt", "fought", "found",
    "held", "kept", "lent", "lost", "meant", "met", "paid", "said", "sent", "sold",
    "sought", "spent", "taught", "thought", "told", "understood", "wept", "led", "fed", "bred",
    "fled", "sped", "heard", "laid", "shot", "slid", "swept", "dug",
];

/// Ambiguous forms that must stay out of [`IRREGULAR_PAST_PARTICIPLES`].
#[cfg(test)]
const EXCLUDED: &[&str] = &[
    "left", "read", "hit", "cut", "put", "set", "shut", "split", "spread", "cast", "hurt",
];

static PARTICIPLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IRREGULAR_PAST_PARTICIPLES.iter().copied().collect());

/// Check if a word is an irregular past participle.
pub fn is_irregular_past_participle(word: &str) -> bool {
    PARTICIPLE_SET.contains(word.to_lowercase().as_str())
}
