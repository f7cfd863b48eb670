//! Analyze command: statistics, story format, and suggestions for a draft.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument};

use wordcraft_core::config::Config;
use wordcraft_core::readability::{ReadabilityStats, Verdict};
use wordcraft_core::suggestion::Suggestion;
use wordcraft_core::{
    AudienceLevel, Genre, StoryAdvice, StyleProfile, WordGoal, analyze_with_limit,
};

use super::read_draft;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`.md` files are stripped to prose).
    pub file: Utf8PathBuf,

    /// Genre; selects the cliché list. Other names disable cliché checks.
    #[arg(long)]
    pub genre: Option<Genre>,

    /// Tone label, carried into the report.
    #[arg(long)]
    pub tone: Option<String>,

    /// Target audience.
    #[arg(long, value_enum)]
    pub audience: Option<AudienceLevel>,

    /// Maximum number of suggestions to show.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Word-count goal.
    #[arg(long)]
    pub goal: Option<usize>,
}

/// Progress toward the word goal.
#[derive(Debug, Serialize, JsonSchema)]
pub struct GoalReport {
    /// Target word count.
    pub target: usize,
    /// Percent reached, capped at 100.
    pub progress_percent: u8,
    /// Words still needed.
    pub remaining: usize,
}

/// Output of `analyze --json`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct AnalyzeReport {
    /// The analyzed file.
    pub file: String,
    /// Profile the draft was analyzed with.
    pub profile: StyleProfile,
    /// Readability statistics.
    pub stats: ReadabilityStats,
    /// Judgement of the readability score.
    pub verdict: Verdict,
    /// Story format advice.
    pub story: StoryAdvice,
    /// Word goal progress.
    pub goal: GoalReport,
    /// Suggestions in detector order.
    pub suggestions: Vec<Suggestion>,
}

impl AnalyzeArgs {
    fn profile(&self, config: &Config) -> StyleProfile {
        let mut profile = config.style_profile();
        if let Some(genre) = self.genre {
            profile.genre = genre;
        }
        if let Some(ref tone) = self.tone {
            profile.tone.clone_from(tone);
        }
        if let Some(audience) = self.audience {
            profile.audience = audience;
        }
        profile
    }
}

/// Analyze a draft and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, genre = ?args.genre, limit = ?args.limit, "executing analyze command");

    let content = read_draft(&args.file, config.input_limit())?;
    let profile = args.profile(config);
    let limit = args.limit.unwrap_or_else(|| config.suggestion_limit());
    let goal = args.goal.map_or_else(|| config.word_goal(), WordGoal::new);

    let analysis = analyze_with_limit(&content, Some(&profile), limit);
    let words = analysis.stats.word_count;
    let report = AnalyzeReport {
        file: args.file.to_string(),
        verdict: analysis.stats.verdict(),
        story: StoryAdvice::for_word_count(words),
        goal: GoalReport {
            target: goal.target,
            progress_percent: goal.progress(words),
            remaining: goal.remaining(words),
        },
        profile,
        stats: analysis.stats,
        suggestions: analysis.suggestions,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalyzeReport) {
    let stats = &report.stats;
    println!(
        "{} {}",
        report.file.bold(),
        format!("({}, {})", report.profile.genre, report.profile.tone).dimmed()
    );

    println!(
        "\n  {} {} words, {} sentences, {} paragraphs, {} min read",
        "Stats:".cyan(),
        stats.word_count,
        stats.sentence_count,
        stats.paragraph_count,
        stats.reading_time_minutes,
    );
    println!(
        "  {} {}/100, {} ({})",
        "Readability:".cyan(),
        colored_score(stats.readability_score),
        stats.grade_level,
        report.verdict.describe(),
    );
    println!(
        "  {} {} complex sentences, {} passive",
        "Structure:".cyan(),
        stats.complex_sentence_count,
        stats.passive_voice_count,
    );
    println!(
        "  {} {} / {} words ({}%)",
        "Goal:".cyan(),
        stats.word_count,
        report.goal.target,
        report.goal.progress_percent,
    );

    println!("\n  {} {}", "Format:".cyan(), report.story.format);
    for tip in &report.story.recommendations {
        println!("    - {tip}");
    }

    if report.suggestions.is_empty() {
        println!("\n  {}", "No suggestions.".green());
        return;
    }

    println!("\n  {} {}", "Suggestions:".yellow(), report.suggestions.len());
    for group in wordcraft_core::suggestion::group_by_category(&report.suggestions) {
        println!("\n  {}", group.category.as_str().bold());
        for s in group.suggestions {
            println!(
                "    {} \"{}\": {}",
                format!("@{}", s.offset).dimmed(),
                s.original,
                s.suggestion,
            );
            println!("      {}", s.reason.dimmed());
        }
    }
}

fn colored_score(score: u8) -> String {
    match Verdict::from_score(score) {
        Verdict::Excellent => score.green().to_string(),
        Verdict::Good => score.yellow().to_string(),
        Verdict::NeedsWork => score.red().to_string(),
    }
}
