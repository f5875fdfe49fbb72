//! Rewind - unified CLI.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, Settings, replay};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { size, reversed } => {
            rewind::tui::run(&settings.with_overrides(size, reversed))
        }
        Command::Replay {
            size,
            reversed,
            step,
            json,
            cells,
        } => run_replay(settings.with_overrides(size, reversed), step, json, &cells),
    }
}

/// Play `cells` and print the report to stdout.
fn run_replay(settings: Settings, step: Option<usize>, json: bool, cells: &[usize]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = replay::run(&settings, step, cells)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
