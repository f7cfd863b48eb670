//! Writer style profile.
//!
//! The profile describes the draft's genre, tone, and audience. Only the
//! genre influences analysis (it picks the cliché list); tone and audience are
//! carried through for display.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Literary genre of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    /// General fiction.
    #[default]
    Fiction,
    /// Romance.
    Romance,
    /// Mystery and crime.
    Mystery,
    /// Science fiction.
    #[serde(rename = "sci-fi")]
    SciFi,
    /// Fantasy.
    Fantasy,
    /// Non-fiction.
    NonFiction,
    /// Any genre wordcraft does not know about.
    #[serde(other)]
    Unknown,
}

impl Genre {
    /// Every named genre, in help order. Excludes [`Genre::Unknown`].
    pub const KNOWN: [Self; 6] = [
        Self::Fiction,
        Self::Romance,
        Self::Mystery,
        Self::SciFi,
        Self::Fantasy,
        Self::NonFiction,
    ];

    /// Returns the genre as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::Romance => "romance",
            Self::Mystery => "mystery",
            Self::SciFi => "sci-fi",
            Self::Fantasy => "fantasy",
            Self::NonFiction => "non-fiction",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = std::convert::Infallible;

    /// Parse a genre name. Unrecognised names map to [`Genre::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genre = match s.trim().to_ascii_lowercase().as_str() {
            "fiction" => Self::Fiction,
            "romance" => Self::Romance,
            "mystery" => Self::Mystery,
            "sci-fi" | "scifi" => Self::SciFi,
            "fantasy" => Self::Fantasy,
            "non-fiction" | "nonfiction" => Self::NonFiction,
            _ => Self::Unknown,
        };
        Ok(genre)
    }
}

/// Command-line parser for [`Genre`].
///
/// Lists the named genres in help but accepts any value, mapping unrecognised
/// names to [`Genre::Unknown`] the same way configuration files do.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreParser;

#[cfg(feature = "clap")]
impl clap::builder::TypedValueParser for GenreParser {
    type Value = Genre;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let value = value
            .to_str()
            .ok_or_else(|| clap::Error::new(clap::error::ErrorKind::InvalidUtf8).with_cmd(cmd))?;
        Ok(value.parse().unwrap_or_else(|never| match never {}))
    }

    fn possible_values(
        &self,
    ) -> Option<Box<dyn Iterator<Item = clap::builder::PossibleValue> + '_>> {
        Some(Box::new(
            Genre::KNOWN
                .into_iter()
                .map(|genre| clap::builder::PossibleValue::new(genre.as_str())),
        ))
    }
}

#[cfg(feature = "clap")]
impl clap::builder::ValueParserFactory for Genre {
    type Parser = GenreParser;

    fn value_parser() -> Self::Parser {
        GenreParser
    }
}

/// Intended readership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AudienceLevel {
    /// Readers of all ages.
    General,
    /// Scholarly readers.
    Academic,
    /// Young readers.
    Children,
    /// Adult readers.
    #[default]
    Adults,
}

impl AudienceLevel {
    /// Returns the audience as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Academic => "academic",
            Self::Children => "children",
            Self::Adults => "adults",
        }
    }
}

impl fmt::Display for AudienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default narrative tone.
pub const DEFAULT_TONE: &str = "narrative";

/// Caller-supplied style configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct StyleProfile {
    /// Genre; selects the cliché list.
    pub genre: Genre,
    /// Free-form tone description (e.g. "narrative", "playful").
    pub tone: String,
    /// Intended audience.
    pub audience: AudienceLevel,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            genre: Genre::default(),
            tone: DEFAULT_TONE.to_string(),
            audience: AudienceLevel::default(),
        }
    }
}

impl StyleProfile {
    /// Default profile with the given genre.
    pub fn for_genre(genre: Genre) -> Self {
        Self {
            genre,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_adult_fiction() {
        let profile = StyleProfile::default();
        assert_eq!(profile.genre, Genre::Fiction);
        assert_eq!(profile.tone, "narrative");
        assert_eq!(profile.audience, AudienceLevel::Adults);
    }

    #[test]
    fn genre_parsing_is_lenient() {
        assert_eq!("Mystery".parse::<Genre>().unwrap(), Genre::Mystery);
        assert_eq!("sci-fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("non-fiction".parse::<Genre>().unwrap(), Genre::NonFiction);
        assert_eq!("western".parse::<Genre>().unwrap(), Genre::Unknown);
    }

    #[test]
    fn genre_round_trips_through_display() {
        for genre in Genre::KNOWN {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn unknown_genre_deserializes() {
        let profile: StyleProfile =
            serde_json::from_str(r#"{"genre": "western", "tone": "dry"}"#).unwrap();
        assert_eq!(profile.genre, Genre::Unknown);
        assert_eq!(profile.tone, "dry");
        assert_eq!(profile.audience, AudienceLevel::Adults);
    }

    #[test]
    fn sci_fi_serializes_with_hyphen() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, r#""sci-fi""#);
        let json = serde_json::to_string(&Genre::NonFiction).unwrap();
        assert_eq!(json, r#""non-fiction""#);
    }
}
