//! Export command: render a draft as text, Markdown, or HTML.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordcraft_core::config::Config;
use wordcraft_core::export::{self, ExportFormat};

use super::read_input_file;

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Draft to export.
    pub file: Utf8PathBuf,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t)]
    pub format: ExportFormat,

    /// Document title (defaults to the file stem).
    #[arg(long, short)]
    pub title: Option<String>,

    /// Write to PATH instead of `<title>.<ext>`; `-` writes to stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct ExportReport<'a> {
    title: &'a str,
    format: ExportFormat,
    mime_type: &'static str,
    output: &'a str,
    bytes: usize,
}

impl ExportArgs {
    fn title(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.file.file_stem().map(str::to_string))
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

/// Render a draft and write it out.
#[instrument(name = "cmd_export", skip_all, fields(file = %args.file, format = %args.format))]
pub fn cmd_export(args: ExportArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, format = %args.format, "executing export command");

    let content = read_input_file(&args.file, config.input_limit())?;
    let title = args.title();
    let rendered = export::render(&title, &content, args.format);

    let output = match args.output {
        Some(ref path) if path.as_str() == "-" => None,
        Some(ref path) => Some(path.clone()),
        None => Some(Utf8PathBuf::from(args.format.file_name(&title))),
    };

    let Some(ref path) = output else {
        print!("{rendered}");
        return Ok(());
    };
    if same_file(&args.file, path) {
        anyhow::bail!(
            "refusing to overwrite input file {path}; pass --output to choose another path"
        );
    }

    std::fs::write(path.as_std_path(), &rendered)
        .with_context(|| format!("failed to write {path}"))?;

    if global_json {
        let report = ExportReport {
            title: &title,
            format: args.format,
            mime_type: args.format.mime_type(),
            output: path.as_str(),
            bytes: rendered.len(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", "Wrote".green(), path);
    }

    Ok(())
}

/// Whether both paths resolve to the same existing file.
fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
