//! # midsha-cli — Command-Line Front End
//!
//! Thin caller of `midsha-core`. Everything that touches files or stdin
//! lives here; the engine itself never does I/O.
//!
//! ## Subcommands
//!
//! - `midsha digest` — print the hex digest of a file, stdin, or `--text`.
//! - `midsha snapshot` — hash the block-aligned prefix and emit its midstate.
//! - `midsha resume` — continue from a saved midstate and print the digest.
//! - `midsha selftest` — run the built-in known-answer vectors.
//!
//! ```bash
//! midsha snapshot big.bin --output big.midstate.json
//! midsha resume --state big.midstate.json --text "more bytes"
//! ```

pub mod digest;
pub mod resume;
pub mod selftest;
pub mod snapshot;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Where a subcommand takes its message bytes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Hash this literal string (UTF-8 bytes) instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File to read. `-` or omitted reads standard input.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Load the selected input fully into memory.
    pub fn read(&self) -> Result<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path)
                .with_context(|| format!("failed to read input file: {}", path.display())),
            _ => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read standard input")?;
                Ok(buf)
            }
        }
    }
}
