//! # Resume Subcommand
//!
//! Loads a midstate JSON file written by `midsha snapshot`, absorbs the
//! remaining input, and prints the digest of the whole message.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use midsha_core::{Midstate, Sha256Engine};

use crate::InputArgs;

/// Arguments for `midsha resume`.
#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// Midstate JSON file produced by `midsha snapshot`.
    #[arg(long, value_name = "PATH")]
    pub state: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the resume subcommand.
pub fn run_resume(args: &ResumeArgs) -> Result<u8> {
    let midstate = load_midstate(&args.state)?;
    let data = args.input.read()?;
    let hex = resume_hex(&midstate, &data);
    tracing::debug!(
        resumed_at = midstate.byte_count(),
        absorbed = data.len(),
        "resumed digest computed"
    );
    println!("{hex}");
    Ok(0)
}

/// Read and validate a midstate JSON file.
pub fn load_midstate(path: &Path) -> Result<Midstate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read midstate: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse midstate: {}", path.display()))
}

/// Digest of the message whose prefix `midstate` covers, followed by `rest`.
pub fn resume_hex(midstate: &Midstate, rest: &[u8]) -> String {
    let mut engine = Sha256Engine::from_midstate(midstate);
    engine.update(rest);
    engine.hexdigest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot_prefix;

    #[test]
    fn test_snapshot_then_resume_matches_whole_digest() {
        let message = vec![b'a'; 129];
        let (midstate, tail) = snapshot_prefix(&message).unwrap();
        let rest = &message[message.len() - tail..];
        assert_eq!(
            resume_hex(&midstate, rest),
            "c12cb024a2e5551cca0e08fce8f1c5e314555cc3fef6329ee994a3db752166ae"
        );
    }

    #[test]
    fn test_load_midstate_rejects_unaligned_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"state":"6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19","byte_count":10}"#,
        )
        .unwrap();
        let err = load_midstate(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a multiple of 64"));
    }

    #[test]
    fn test_run_resume_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let (midstate, _) = snapshot_prefix(&[0u8; 64]).unwrap();
        std::fs::write(&path, serde_json::to_string(&midstate).unwrap()).unwrap();

        let args = ResumeArgs {
            state: path,
            input: InputArgs {
                text: Some("rest".into()),
                file: None,
            },
        };
        assert_eq!(run_resume(&args).unwrap(), 0);
    }
}
