//! Readability scoring using a Flesch-Kincaid-style grade estimate.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (avg_word_length/5) - 15.59`
//!
//! Average word length divided by five stands in for syllables per word. The
//! grade maps to a band label and to a 0-100 score,
//! `clamp(100 - grade * 3.6, 0, 100)`. Higher scores read more easily.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detectors::{count_complex_sentences, find_passive_voice};
use crate::stats::{LexicalStats, round1};
use crate::text::Document;

/// US school band for a grade estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum GradeLevel {
    /// No text to score.
    #[serde(rename = "N/A")]
    NotApplicable,
    /// Grade below 6.
    #[serde(rename = "Elementary")]
    Elementary,
    /// Grade 6 up to 9.
    #[serde(rename = "Middle School")]
    MiddleSchool,
    /// Grade 9 up to 13.
    #[serde(rename = "High School")]
    HighSchool,
    /// Grade 13 up to 16.
    #[serde(rename = "College")]
    College,
    /// Grade 16 and above.
    #[serde(rename = "Graduate")]
    Graduate,
}

impl GradeLevel {
    /// Band a grade estimate.
    pub fn from_grade(grade: f64) -> Self {
        if grade < 6.0 {
            Self::Elementary
        } else if grade < 9.0 {
            Self::MiddleSchool
        } else if grade < 13.0 {
            Self::HighSchool
        } else if grade < 16.0 {
            Self::College
        } else {
            Self::Graduate
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::Elementary => "Elementary",
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse judgement of a readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Score above 70.
    Excellent,
    /// Score above 50.
    Good,
    /// Score of 50 or less.
    NeedsWork,
}

impl Verdict {
    /// Judge a 0-100 score.
    pub const fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::Excellent
        } else if score > 50 {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }

    /// Short description for display.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent readability",
            Self::Good => "Good readability",
            Self::NeedsWork => "Improve readability",
        }
    }
}

/// Output of the grade formula for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScore {
    /// Raw grade estimate; `None` for an empty document.
    pub grade: Option<f64>,
    /// Band label.
    pub level: GradeLevel,
    /// 0-100 score, rounded.
    pub score: u8,
}

/// Flesch-Kincaid-style grade from mean sentence and word length.
///
/// Evaluated as separate multiplies and adds; a fused multiply-add rounds
/// differently and can move a grade across a band edge.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_kincaid_grade(avg_sentence_length: f64, avg_word_length: f64) -> f64 {
    0.39 * avg_sentence_length + 11.8 * (avg_word_length / 5.0) - 15.59
}

/// Map a grade onto the 0-100 score.
#[allow(clippy::suboptimal_flops)]
pub fn score_from_grade(grade: f64) -> u8 {
    // clamped to 0..=100 before the cast
    (100.0 - grade * 3.6).clamp(0.0, 100.0).round() as u8
}

/// Score lexical statistics.
///
/// An empty document is scored `N/A` with a score of 0 before the formula is
/// applied.
pub fn grade(stats: &LexicalStats) -> GradeScore {
    if stats.word_count == 0 {
        return GradeScore {
            grade: None,
            level: GradeLevel::NotApplicable,
            score: 0,
        };
    }

    let grade = flesch_kincaid_grade(stats.mean_sentence_length(), stats.mean_word_length());
    GradeScore {
        grade: Some(grade),
        level: GradeLevel::from_grade(grade),
        score: score_from_grade(grade),
    }
}

/// Readability report for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityStats {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Characters, whitespace included.
    pub character_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Paragraphs.
    pub paragraph_count: usize,
    /// Mean word length in characters, one decimal.
    pub avg_word_length: f64,
    /// Mean words per sentence, one decimal.
    pub avg_sentence_length: f64,
    /// Estimated reading time at 200 words per minute, rounded up.
    pub reading_time_minutes: usize,
    /// Grade band label.
    pub grade_level: GradeLevel,
    /// Grade estimate, one decimal; absent for an empty document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_kincaid_grade: Option<f64>,
    /// 0-100 score; higher reads more easily.
    pub readability_score: u8,
    /// Sentences longer than 20 words.
    pub complex_sentence_count: usize,
    /// Passive constructions.
    pub passive_voice_count: usize,
}

impl ReadabilityStats {
    /// Statistics for an empty or whitespace-only document: every count is zero.
    pub const fn empty() -> Self {
        Self {
            word_count: 0,
            character_count: 0,
            sentence_count: 0,
            paragraph_count: 0,
            avg_word_length: 0.0,
            avg_sentence_length: 0.0,
            reading_time_minutes: 0,
            grade_level: GradeLevel::NotApplicable,
            flesch_kincaid_grade: None,
            readability_score: 0,
            complex_sentence_count: 0,
            passive_voice_count: 0,
        }
    }

    /// Judgement of the score.
    pub const fn verdict(&self) -> Verdict {
        Verdict::from_score(self.readability_score)
    }
}

/// Compute the readability report for a document.
#[tracing::instrument(skip_all, fields(text_len = doc.text().len()))]
pub fn readability_stats(doc: &Document<'_>) -> ReadabilityStats {
    if doc.is_blank() {
        return ReadabilityStats::empty();
    }

    let lexical = LexicalStats::compute(doc);
    let scored = grade(&lexical);

    ReadabilityStats {
        word_count: lexical.word_count,
        character_count: lexical.character_count,
        sentence_count: lexical.sentence_count,
        paragraph_count: lexical.paragraph_count,
        avg_word_length: lexical.avg_word_length,
        avg_sentence_length: lexical.avg_sentence_length,
        reading_time_minutes: lexical.reading_time_minutes,
        grade_level: scored.level,
        flesch_kincaid_grade: scored.grade.map(round1),
        readability_score: scored.score,
        complex_sentence_count: count_complex_sentences(doc),
        passive_voice_count: find_passive_voice(doc.text()).len(),
    }
}

/// Convenience wrapper: segment `text` and compute its readability report.
pub fn check_readability(text: &str) -> ReadabilityStats {
    readability_stats(&Document::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bands() {
        assert_eq!(GradeLevel::from_grade(-3.0), GradeLevel::Elementary);
        assert_eq!(GradeLevel::from_grade(5.99), GradeLevel::Elementary);
        assert_eq!(GradeLevel::from_grade(6.0), GradeLevel::MiddleSchool);
        assert_eq!(GradeLevel::from_grade(8.99), GradeLevel::MiddleSchool);
        assert_eq!(GradeLevel::from_grade(9.0), GradeLevel::HighSchool);
        assert_eq!(GradeLevel::from_grade(12.99), GradeLevel::HighSchool);
        assert_eq!(GradeLevel::from_grade(13.0), GradeLevel::College);
        assert_eq!(GradeLevel::from_grade(15.99), GradeLevel::College);
        assert_eq!(GradeLevel::from_grade(16.0), GradeLevel::Graduate);
    }

    #[test]
    fn formula_matches_reference() {
        let grade = flesch_kincaid_grade(30.0, 6.0);
        // 0.39 * 30 + 11.8 * 1.2 - 15.59
        assert!((grade - 10.27).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn formula_is_bit_exact_without_fused_ops() {
        for (sentence, word) in [(30.0, 6.0), (12.5, 4.3), (17.0, 4.8), (1.0, 1.0), (23.7, 5.1)] {
            let plain: f64 = 0.39 * sentence + 11.8 * (word / 5.0) - 15.59;
            assert_eq!(flesch_kincaid_grade(sentence, word).to_bits(), plain.to_bits());
        }
    }

    #[test]
    fn score_is_clamped() {
        assert_eq!(score_from_grade(-10.0), 100);
        assert_eq!(score_from_grade(40.0), 0);
        assert_eq!(score_from_grade(10.0), 64);
    }

    #[test]
    fn empty_input_is_not_applicable() {
        for text in ["", "   ", "\n\n\t"] {
            let stats = check_readability(text);
            assert_eq!(stats.word_count, 0);
            assert_eq!(stats.sentence_count, 0);
            assert_eq!(stats.paragraph_count, 0);
            assert_eq!(stats.passive_voice_count, 0);
            assert_eq!(stats.complex_sentence_count, 0);
            assert_eq!(stats.readability_score, 0);
            assert_eq!(stats.grade_level, GradeLevel::NotApplicable);
            assert_eq!(stats.grade_level.label(), "N/A");
            assert!(stats.flesch_kincaid_grade.is_none());
        }
    }

    #[test]
    fn short_simple_text_is_elementary() {
        let stats = check_readability("The cat sat on the mat. The dog ran fast.");
        assert_eq!(stats.word_count, 10);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.grade_level, GradeLevel::Elementary);
        // grade is about -6.1, so the score clamps to 100
        assert_eq!(stats.readability_score, 100);
        assert_eq!(stats.verdict(), Verdict::Excellent);
    }

    #[test]
    fn long_sentence_scores_high_school() {
        // 29 six-letter words and a final "planet." (7 characters)
        let mut text = "planet ".repeat(29);
        text.push_str("planet.");
        let stats = check_readability(&text);
        assert_eq!(stats.word_count, 30);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.avg_word_length, 6.0);
        assert_eq!(stats.avg_sentence_length, 30.0);
        assert_eq!(stats.complex_sentence_count, 1);
        assert_eq!(stats.grade_level, GradeLevel::HighSchool);
        assert_eq!(stats.flesch_kincaid_grade, Some(10.3));
        assert_eq!(stats.readability_score, 63);
        assert_eq!(stats.verdict(), Verdict::Good);
    }

    #[test]
    fn counts_passive_and_complex() {
        let stats = check_readability("The ball was thrown by him. The window was broken.");
        assert_eq!(stats.passive_voice_count, 2);
        assert_eq!(stats.complex_sentence_count, 0);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(71), Verdict::Excellent);
        assert_eq!(Verdict::from_score(70), Verdict::Good);
        assert_eq!(Verdict::from_score(51), Verdict::Good);
        assert_eq!(Verdict::from_score(50), Verdict::NeedsWork);
        assert_eq!(Verdict::from_score(0), Verdict::NeedsWork);
    }

    #[test]
    fn grade_level_serializes_as_label() {
        let json = serde_json::to_string(&GradeLevel::MiddleSchool).unwrap();
        assert_eq!(json, r#""Middle School""#);
        let json = serde_json::to_string(&GradeLevel::NotApplicable).unwrap();
        assert_eq!(json, r#""N/A""#);
    }

    #[test]
    fn stats_are_deterministic() {
        let text = "It was a dark and stormy night. The door was opened slowly.";
        assert_eq!(check_readability(text), check_readability(text));
    }
}
