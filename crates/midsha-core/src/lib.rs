#![deny(missing_docs)]

//! # midsha-core — SHA-256 with an Exportable Midstate
//!
//! An incremental SHA-256 engine whose internal compression state can be
//! captured after any whole 64-byte block and restored later, in another
//! engine, thread, process, or machine, without replaying earlier input.
//!
//! ```
//! use midsha_core::Sha256Engine;
//!
//! let mut head = Sha256Engine::new();
//! head.update([b'a'; 64]);
//! let midstate = head.export_midstate().unwrap();
//!
//! let mut tail = Sha256Engine::from_midstate(&midstate);
//! tail.update(b"bc");
//!
//! let mut whole = Sha256Engine::new();
//! whole.update([b'a'; 64]);
//! whole.update(b"bc");
//! assert_eq!(tail.digest(), whole.digest());
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Snapshots, not shared state.** Progress moves between engines only
//!    through immutable [`Midstate`] values. A snapshot always carries its
//!    byte count, so length padding stays correct after a resume.
//!
//! 2. **Boundary-only export.** [`Sha256Engine::export_midstate`] fails with
//!    [`MidstateError::StateBoundary`] while a partial block is buffered.
//!
//! 3. **Non-destructive finalization.** [`Sha256Engine::digest`] works on a
//!    copy; the engine stays usable and `update` continues the message.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O: persisting a snapshot is the caller's business.

mod compress;
pub mod constants;
pub mod digest;
pub mod engine;
pub mod error;
mod hex;
pub mod midstate;

// Re-export primary types for ergonomic imports.
pub use constants::{BLOCK_LEN, DIGEST_LEN};
pub use digest::{DigestParseError, Sha256Digest};
pub use engine::{sha256, Sha256Engine};
pub use error::MidstateError;
pub use midstate::{Midstate, ENCODED_LEN, STATE_LEN};
