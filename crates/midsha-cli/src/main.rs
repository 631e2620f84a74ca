//! # midsha CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use midsha_cli::digest::{run_digest, DigestArgs};
use midsha_cli::resume::{run_resume, ResumeArgs};
use midsha_cli::selftest::{run_selftest, SelftestArgs};
use midsha_cli::snapshot::{run_snapshot, SnapshotArgs};

/// SHA-256 with a resumable midstate.
///
/// Computes digests, captures the hash state at a block boundary, and
/// finishes a hash from a captured state without the earlier input.
#[derive(Parser, Debug)]
#[command(name = "midsha", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of the input.
    Digest(DigestArgs),

    /// Hash the block-aligned prefix of the input and emit its midstate.
    Snapshot(SnapshotArgs),

    /// Finish a hash from a saved midstate plus the remaining input.
    Resume(ResumeArgs),

    /// Check the engine against known-answer vectors.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("midsha CLI starting");

    let result = match cli.command {
        Commands::Digest(args) => run_digest(&args),
        Commands::Snapshot(args) => run_snapshot(&args),
        Commands::Resume(args) => run_resume(&args),
        Commands::Selftest(args) => run_selftest(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
