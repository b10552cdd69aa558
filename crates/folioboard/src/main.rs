//! folioboard - Portfolio quality dashboard

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folioboard_core::SnapshotParser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folioboard",
    version,
    about = "Portfolio quality dashboard",
    long_about = "Ranks a portfolio's sub-components from worst to best and renders them\n\
                  as a table with rating cells and a proportional lines-of-code bar.\n\
                  \n\
                  The input is a portfolio measures export (JSON): one portfolio plus a\n\
                  page of its sub-components with pre-computed measures.\n\
                  \n\
                  Examples:\n\
                    folioboard portfolio.json            # Interactive table (default)\n\
                    folioboard portfolio.json print      # Static table on stdout\n\
                    folioboard portfolio.json json       # Ranked snapshot as JSON\n\
                  \n\
                  Environment Variables:\n\
                    FOLIOBOARD_INPUT                     # Snapshot path\n\
                    FOLIOBOARD_NO_COLOR                  # Disable ANSI colors\n\
                    RUST_LOG                             # Log filter (print/json modes)"
)]
struct Cli {
    /// Path to the portfolio snapshot JSON
    #[arg(env = "FOLIOBOARD_INPUT")]
    snapshot: PathBuf,

    #[command(subcommand)]
    mode: Option<Mode>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "FOLIOBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive table (default)
    Tui,
    /// Print the ranked table to stdout and exit
    Print,
    /// Emit the ranked snapshot as JSON and exit
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = cli.mode.unwrap_or(Mode::Tui);
    if !matches!(mode, Mode::Tui) {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let snapshot = SnapshotParser::new()
        .parse(&cli.snapshot)
        .with_context(|| format!("Failed to load snapshot {}", cli.snapshot.display()))?;
    tracing::debug!(
        component = %snapshot.component,
        shown = snapshot.sub_components.len(),
        total = snapshot.total(),
        "Snapshot loaded"
    );

    match mode {
        Mode::Tui => folioboard_tui::run(snapshot),
        Mode::Print => cli::print_table(&snapshot, cli.no_color),
        Mode::Json => cli::print_json(&snapshot),
    }
}
