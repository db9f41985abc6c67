mod categorize;
mod error;
mod import;
mod models;
mod normalize;
mod run;
mod ui;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Browse credit card statement exports in the terminal.
#[derive(Debug, Parser)]
#[command(name = "stmtui", version, about)]
struct Cli {
    /// Statement list JSON file
    file: PathBuf,

    /// Print the provider summary and exit instead of opening the dashboard
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut statements = import::load_statements(&cli.file)
        .with_context(|| format!("Error loading statements from {}", cli.file.display()))?;
    if statements.is_empty() {
        tracing::warn!(path = %cli.file.display(), "statement file contains no statements");
    }

    let categorized = categorize::enrich(&mut statements);
    tracing::info!(
        statements = statements.len(),
        transactions = categorized.len(),
        "statements enriched"
    );

    if cli.summary {
        run::print_summary(&statements, &categorized);
        return Ok(());
    }

    run::as_tui(ui::app::App::new(statements, categorized))
}
