//! Library interface for the `wordcraft` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, wordcraft_core=trace)
    WORDCRAFT_LOG_PATH     Explicit log file path
    WORDCRAFT_LOG_DIR      Log directory
    WORDCRAFT_GENRE        Default genre (fiction, romance, mystery, ...)
    WORDCRAFT_MIN_SCORE    Minimum readability score for `readability`
";

/// Command-line interface definition for wordcraft.
#[derive(Parser)]
#[command(name = "wordcraft")]
#[command(about = "Readability statistics and writing suggestions for creative drafts", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a draft: statistics, story format, and suggestions
    Analyze(commands::analyze::AnalyzeArgs),

    /// Score readability only
    Readability(commands::readability::ReadabilityArgs),

    /// Render a draft as text, Markdown, or HTML
    Export(commands::export::ExportArgs),

    /// Print the JSON Schema of `analyze --json` output
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_profile() {
        let cli = Cli::try_parse_from([
            "wordcraft", "analyze", "draft.txt", "--genre", "mystery", "--limit", "3",
        ])
        .unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.file.as_str(), "draft.txt");
        assert_eq!(args.genre, Some(wordcraft_core::Genre::Mystery));
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn unrecognised_genre_parses_as_unknown() {
        let cli = Cli::try_parse_from(["wordcraft", "analyze", "draft.txt", "--genre", "Western"])
            .unwrap();
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.genre, Some(wordcraft_core::Genre::Unknown));
    }

    #[test]
    fn genre_help_lists_named_genres() {
        let mut cmd = command();
        let analyze = cmd.find_subcommand_mut("analyze").unwrap();
        let help = analyze.render_long_help().to_string();
        assert!(help.contains("sci-fi"), "{help}");
        assert!(help.contains("non-fiction"), "{help}");
    }

    #[test]
    fn rejects_unknown_export_format() {
        assert!(
            Cli::try_parse_from(["wordcraft", "export", "draft.txt", "--format", "pdf"]).is_err()
        );
    }
}
