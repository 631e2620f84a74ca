//! # Snapshot Subcommand
//!
//! Hashes the longest block-aligned prefix of the input and writes the
//! resulting midstate as JSON. Trailing bytes that do not fill a block are
//! not absorbed; the caller must feed them (and anything after them) to
//! `midsha resume`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use midsha_core::{Midstate, Sha256Engine, BLOCK_LEN};

use crate::InputArgs;

/// Arguments for `midsha snapshot`.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the midstate JSON here instead of standard output.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the snapshot subcommand.
pub fn run_snapshot(args: &SnapshotArgs) -> Result<u8> {
    let data = args.input.read()?;
    let (midstate, tail) = snapshot_prefix(&data)?;
    if tail > 0 {
        tracing::warn!(
            unconsumed = tail,
            "input is not block-aligned; trailing bytes were not absorbed"
        );
    }
    tracing::info!(byte_count = midstate.byte_count(), "midstate captured");

    let json = serde_json::to_string_pretty(&midstate).context("failed to serialize midstate")?;
    match &args.output {
        Some(path) => write_snapshot(path, &json)?,
        None => println!("{json}"),
    }
    Ok(0)
}

/// Absorb the block-aligned prefix of `data`.
///
/// Returns the midstate and the number of trailing bytes left out.
pub fn snapshot_prefix(data: &[u8]) -> Result<(Midstate, usize)> {
    let aligned = data.len() - data.len() % BLOCK_LEN;
    let engine = Sha256Engine::with_data(&data[..aligned]);
    let midstate = engine.export_midstate()?;
    Ok((midstate, data.len() - aligned))
}

fn write_snapshot(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write midstate: {}", path.display()))?;
    println!("OK: wrote midstate to {}", path.display());
    Ok(())
}
