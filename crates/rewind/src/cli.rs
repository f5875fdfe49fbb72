//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a settings file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board size (rows and columns)
        #[arg(short, long)]
        size: Option<usize>,

        /// Show the move list newest first (`--reversed=false` turns it off)
        #[arg(
            short,
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        reversed: Option<bool>,
    },

    /// Play a list of cells and print the resulting game
    Replay {
        /// Board size (rows and columns)
        #[arg(short, long)]
        size: Option<usize>,

        /// Show the move list newest first (`--reversed=false` turns it off)
        #[arg(
            short,
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        reversed: Option<bool>,

        /// Move the cursor to this step after playing
        #[arg(long)]
        step: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Cells to play in order, row-major from 0
        #[arg(value_delimiter = ',')]
        cells: Vec<usize>,
    },
}
