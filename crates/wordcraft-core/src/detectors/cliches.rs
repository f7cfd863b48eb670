//! Genre cliché detection.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::profile::{Genre, StyleProfile};
use crate::suggestion::Category;
use crate::text::{self, Document};
use crate::word_lists::cliches_for;

use super::{Detector, Finding};

/// One case-insensitive matcher per genre that has a curated list.
static MATCHERS: LazyLock<Vec<(Genre, AhoCorasick)>> = LazyLock::new(|| {
    [Genre::Fiction, Genre::Romance, Genre::Mystery]
        .into_iter()
        .map(|genre| {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(cliches_for(genre))
                .expect("valid cliché patterns");
            (genre, matcher)
        })
        .collect()
});

pub(super) const DETECTOR: Detector = Detector {
    name: "cliche",
    id_prefix: "cliche",
    category: Category::Tone,
    confidence: 0.75,
    scan,
};

/// A cliché found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClicheHit {
    /// The phrase from the genre list.
    pub phrase: &'static str,
    /// Character offset of its first occurrence.
    pub offset: usize,
}

/// Find the genre's clichés present in `text`, in list order.
///
/// Each phrase is reported once however often it appears. Genres without a
/// curated list report nothing.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find_cliches(text: &str, genre: Genre) -> Vec<ClicheHit> {
    let phrases = cliches_for(genre);
    let Some((_, matcher)) = MATCHERS.iter().find(|(g, _)| *g == genre) else {
        return Vec::new();
    };

    let mut first_seen: Vec<Option<usize>> = vec![None; phrases.len()];
    for m in matcher.find_overlapping_iter(text) {
        let slot = &mut first_seen[m.pattern().as_usize()];
        if slot.is_none() {
            *slot = Some(m.start());
        }
    }

    phrases
        .iter()
        .zip(first_seen)
        .filter_map(|(&phrase, start)| {
            start.map(|byte| ClicheHit {
                phrase,
                offset: text::char_offset(text, byte),
            })
        })
        .collect()
}

fn scan(doc: &Document<'_>, profile: &StyleProfile) -> Vec<Finding> {
    find_cliches(doc.text(), profile.genre)
        .into_iter()
        .map(|hit| Finding {
            key: hit.phrase.to_string(),
            offset: hit.offset,
            original: hit.phrase.to_string(),
            suggestion: format!(
                "\"{}\" is a common phrase. Try something more original.",
                hit.phrase
            ),
            reason: "Clichés can make writing feel generic".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MYSTERY_TEXT: &str = "At dawn the truth came to light in the harbor.";

    #[test]
    fn mystery_phrase_is_found() {
        let hits = find_cliches(MYSTERY_TEXT, Genre::Mystery);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phrase, "truth came to light");
        assert_eq!(hits[0].offset, 12);
    }

    #[test]
    fn other_genre_lists_do_not_apply() {
        assert!(find_cliches(MYSTERY_TEXT, Genre::Romance).is_empty());
        assert!(find_cliches(MYSTERY_TEXT, Genre::Fiction).is_empty());
    }

    #[test]
    fn uncurated_genres_find_nothing() {
        let text = "Little did she know, the truth came to light.";
        assert!(find_cliches(text, Genre::SciFi).is_empty());
        assert!(find_cliches(text, Genre::Unknown).is_empty());
    }

    #[test]
    fn case_insensitive() {
        let hits = find_cliches("IT WAS A DARK AND STORMY NIGHT.", Genre::Fiction);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].offset, 0);
    }

    #[test]
    fn one_hit_per_phrase_in_list_order() {
        let text = "Needless to say, at the end of the day, needless to say.";
        let hits = find_cliches(text, Genre::Fiction);
        let phrases: Vec<_> = hits.iter().map(|h| h.phrase).collect();
        assert_eq!(phrases, ["at the end of the day", "needless to say"]);
        assert_eq!(hits[1].offset, 0);
    }

    #[test]
    fn scan_uses_profile_genre() {
        let doc = Document::new(MYSTERY_TEXT);
        let findings = scan(&doc, &StyleProfile::for_genre(Genre::Mystery));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "truth came to light");
        assert_eq!(
            findings[0].suggestion,
            "\"truth came to light\" is a common phrase. Try something more original."
        );
        assert!(scan(&doc, &StyleProfile::for_genre(Genre::Romance)).is_empty());
    }
}
