//! # Digest Subcommand
//!
//! One-shot SHA-256 of the selected input, printed as lowercase hex.

use anyhow::Result;
use clap::Args;

use midsha_core::Sha256Engine;

use crate::InputArgs;

/// Arguments for `midsha digest`.
#[derive(Args, Debug)]
pub struct DigestArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the digest subcommand.
pub fn run_digest(args: &DigestArgs) -> Result<u8> {
    let data = args.input.read()?;
    let hex = digest_hex(&data);
    tracing::debug!(bytes = data.len(), "digest computed");
    println!("{hex}");
    Ok(0)
}

/// Hex digest of `data`.
pub fn digest_hex(data: &[u8]) -> String {
    Sha256Engine::with_data(data).hexdigest()
}
