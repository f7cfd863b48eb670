//! Schema command: JSON Schema of the `analyze --json` report.

use clap::Args;
use tracing::instrument;

use super::analyze::AnalyzeReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the report schema as pretty JSON.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(AnalyzeReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
