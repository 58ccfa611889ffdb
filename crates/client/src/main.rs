//! `ledgr` command-line entry point.
//!
//! Composition root for the sheet pipeline: loads `.env`, installs logging,
//! parses the command line and maps the outcome to an exit status.
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 0 | success |
//! | 1 | the run failed (I/O, syntax, schema) |
//! | 2 | the record was rejected (violation, invalid score, mismatch) |
//!
//! ```bash
//! ledgr derive sheets/lyra.yaml -o out/lyra.json
//! ledgr validate sheets/lyra.yaml --schema schemas/house.yaml
//! ```

mod commands;
mod logging;
mod report;

use std::process::ExitCode;

use clap::Parser;
use commands::{Derive, Show, Template, Validate};
use report::Failure;

/// Derive and validate character sheets
#[derive(Parser)]
#[command(name = "ledgr")]
#[command(about = "Derive and validate character sheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline stages (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate, derive and write a character sheet
    Derive(Derive),

    /// Check a character sheet against the schema only
    Validate(Validate),

    /// Print the derived sheet as JSON
    Show(Show),

    /// Print a blank character template
    Template(Template),
}

fn main() -> ExitCode {
    // Load .env file if it exists (for LEDGR_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Command::Derive(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
        Command::Template(cmd) => cmd.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let failure = Failure::from_error(&err);
            for line in &failure.lines {
                eprintln!("{line}");
            }
            ExitCode::from(failure.status)
        }
    }
}
