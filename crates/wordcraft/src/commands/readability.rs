//! Readability command: statistics and score, with an optional minimum.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordcraft_core::config::Config;
use wordcraft_core::readability::{ReadabilityStats, Verdict, check_readability};

use super::read_draft;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to score (`.md` files are stripped to prose).
    pub file: Utf8PathBuf,

    /// Minimum acceptable readability score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

#[derive(Serialize)]
struct ReadabilityReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    stats: &'a ReadabilityStats,
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    below_min: bool,
}

/// Score the readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_draft(&args.file, config.input_limit())?;
    let stats = check_readability(&content);
    let min_score = args.min_score.or(config.min_score);
    let below_min = min_score.is_some_and(|min| stats.readability_score < min);

    if global_json {
        let report = ReadabilityReport {
            file: args.file.as_str(),
            stats: &stats,
            verdict: stats.verdict(),
            min_score,
            below_min,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_stats(&args.file, &stats);
    }

    if below_min {
        bail!(
            "{} scores {} (min: {}). Shorten sentences or prefer shorter words.",
            args.file,
            stats.readability_score,
            min_score.unwrap_or_default(),
        );
    }
    if let (Some(min), false) = (min_score, global_json) {
        println!(
            "{} {} scores {} (min: {})",
            "PASS:".green(),
            args.file,
            stats.readability_score,
            min,
        );
    }

    Ok(())
}

fn print_stats(file: &Utf8PathBuf, stats: &ReadabilityStats) {
    println!("{}", file.bold());
    println!(
        "  {} {}/100 ({})",
        "Score:".cyan(),
        stats.readability_score,
        stats.verdict().describe()
    );
    match stats.flesch_kincaid_grade {
        Some(grade) => println!("  {} {} (grade {grade:.1})", "Level:".cyan(), stats.grade_level),
        None => println!("  {} {}", "Level:".cyan(), stats.grade_level),
    }
    println!(
        "  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        stats.word_count,
        stats.sentence_count,
        stats.paragraph_count,
    );
    println!(
        "  {} {:.1} chars/word, {:.1} words/sentence",
        "Averages:".cyan(),
        stats.avg_word_length,
        stats.avg_sentence_length,
    );
    println!(
        "  {} {} min, {} complex sentences, {} passive",
        "Reading:".cyan(),
        stats.reading_time_minutes,
        stats.complex_sentence_count,
        stats.passive_voice_count,
    );
}
