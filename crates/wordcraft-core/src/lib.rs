//! Core library for wordcraft.
//!
//! Readability statistics and writing suggestions for creative drafts. The
//! engine is a set of pure functions over the draft text: nothing is cached
//! and no I/O happens outside [`config`].
//!
//! # Modules
//!
//! - [`analysis`] - One-call analysis: suggestions plus statistics
//! - [`text`] - Word, sentence, and paragraph segmentation
//! - [`stats`] - Lexical counts and averages
//! - [`detectors`] - Heuristic pattern detectors
//! - [`readability`] - Grade estimate, band, and 0-100 score
//! - [`suggestion`] - Suggestion records and aggregation
//! - [`profile`] - Genre, tone, and audience
//! - [`story`] - Story format advice and word goals
//! - [`export`] - Rendering drafts as text, Markdown, or HTML
//! - [`markdown`] - Markdown drafts reduced to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordcraft_core::{Genre, StyleProfile, analyze};
//!
//! let profile = StyleProfile::for_genre(Genre::Mystery);
//! let analysis = analyze("The door was opened. The truth came to light.", Some(&profile));
//!
//! assert_eq!(analysis.stats.sentence_count, 2);
//! for suggestion in &analysis.suggestions {
//!     println!("{}: {}", suggestion.category, suggestion.suggestion);
//! }
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod detectors;
pub mod dictionaries;
pub mod error;
pub mod export;
pub mod markdown;
pub mod profile;
pub mod readability;
#[cfg(feature = "session")]
pub mod session;
pub mod stats;
pub mod story;
pub mod suggestion;
pub mod text;
pub mod word_lists;

pub use analysis::{Analysis, analyze, analyze_with_limit};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use export::ExportFormat;
pub use profile::{AudienceLevel, Genre, StyleProfile};
pub use readability::{GradeLevel, ReadabilityStats, Verdict, check_readability};
#[cfg(feature = "session")]
pub use session::AnalysisSession;
pub use story::{StoryAdvice, StoryFormat, WordGoal};
pub use suggestion::{Category, Suggestion};
