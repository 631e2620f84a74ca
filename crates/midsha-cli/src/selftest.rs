//! # Selftest Subcommand
//!
//! Runs the FIPS 180-2 known-answer vectors twice: once straight through and
//! once with the computation moved into a fresh engine after every block.

use anyhow::Result;
use clap::Args;

use midsha_core::{Sha256Engine, BLOCK_LEN};

/// Arguments for `midsha selftest`.
#[derive(Args, Debug, Default)]
pub struct SelftestArgs {
    /// Skip the one-million-byte vector.
    #[arg(long)]
    pub quick: bool,
}

struct Vector {
    name: &'static str,
    input: fn() -> Vec<u8>,
    expected: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "empty",
        input: Vec::new,
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    Vector {
        name: "abc",
        input: || b"abc".to_vec(),
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Vector {
        name: "448-bit",
        input: || b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq".to_vec(),
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    Vector {
        name: "a*129",
        input: || vec![b'a'; 129],
        expected: "c12cb024a2e5551cca0e08fce8f1c5e314555cc3fef6329ee994a3db752166ae",
    },
    Vector {
        name: "a*1000000",
        input: || vec![b'a'; 1_000_000],
        expected: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];

/// Execute the selftest subcommand. Returns 1 if any vector fails.
pub fn run_selftest(args: &SelftestArgs) -> Result<u8> {
    let mut failures = 0usize;
    for vector in VECTORS {
        if args.quick && vector.name == "a*1000000" {
            continue;
        }
        let input = (vector.input)();
        let direct = Sha256Engine::with_data(&input).hexdigest();
        let resumed = transplanted_hex(&input)?;

        if direct == vector.expected && resumed == vector.expected {
            println!("OK: {}", vector.name);
        } else {
            failures += 1;
            tracing::error!(
                vector = vector.name,
                expected = vector.expected,
                %direct,
                %resumed,
                "known-answer mismatch"
            );
            println!("FAIL: {}", vector.name);
        }
    }
    Ok(u8::from(failures > 0))
}

/// Hash `input` while moving the computation to a new engine after every
/// completed block.
fn transplanted_hex(input: &[u8]) -> Result<String> {
    let mut engine = Sha256Engine::new();
    for block in input.chunks(BLOCK_LEN) {
        engine.update(block);
        if engine.is_at_block_boundary() {
            let midstate = engine.export_midstate()?;
            engine = Sha256Engine::from_midstate(&midstate);
        }
    }
    Ok(engine.hexdigest())
}
