//! Command-line interface for tl
//!
//! The binary runs a line-oriented session over an in-memory store: commands
//! are read from stdin, and every outcome is reported through the
//! presentation contract. Nothing is persisted between runs.

use clap::Parser;

use crate::error::Result;

mod session;

/// tl - in-memory task tracker
///
/// Reads commands from stdin (one per line) against an in-memory task list.
/// Type 'help' inside a session for the command list.
#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit JSONL events to a file, or "-" for stdout
    #[arg(long, env = "TL_EVENTS")]
    pub events: Option<String>,

    /// Load the example dataset before reading commands
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        session::run(self)
    }
}
