//! Dictionaries for text analysis.
//!
//! Word sets used by the passive voice detector.

pub mod irregular_verbs;
