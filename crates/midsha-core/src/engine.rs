//! # Digest Engine
//!
//! Incremental SHA-256 with an observable midstate. The engine owns three
//! pieces of state:
//!
//! - the eight-word accumulator, advanced only by whole-block compressions,
//! - the total number of bytes absorbed, used for length padding,
//! - a partial-block buffer holding 0..=63 bytes not yet compressed.
//!
//! ## Finalization is non-destructive
//!
//! [`Sha256Engine::digest`] pads and compresses on a private copy of the
//! accumulator. The live engine is untouched, so a caller may take a digest,
//! keep feeding input, and take another digest of the longer message.
//!
//! ## Midstate protocol
//!
//! [`Sha256Engine::export_midstate`] succeeds only at a block boundary (empty
//! buffer) and yields a [`Midstate`] carrying both the accumulator and the
//! byte count. [`Sha256Engine::new_from_midstate`] and
//! [`Sha256Engine::from_midstate`] resume from such a snapshot as if the
//! engine had processed that many bytes of unknown content itself.

use crate::compress::compress;
use crate::constants::{BLOCK_LEN, DIGEST_LEN, H0, STATE_WORDS};
use crate::digest::Sha256Digest;
use crate::error::MidstateError;
use crate::midstate::Midstate;

/// Offset within the final block where the 64-bit length field begins.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Incremental SHA-256 hasher whose midstate can be exported and imported.
#[derive(Debug, Clone)]
pub struct Sha256Engine {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    byte_count: u64,
}

impl Default for Sha256Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256Engine {
    /// A fresh engine seeded with the standard SHA-256 initial hash value.
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            byte_count: 0,
        }
    }

    /// A fresh engine that has already absorbed `data`.
    pub fn with_data(data: impl AsRef<[u8]>) -> Self {
        let mut engine = Self::new();
        engine.update(data);
        engine
    }

    /// Resume from a 32-byte state blob and the byte count it was exported at.
    ///
    /// # Errors
    ///
    /// Returns [`MidstateError::InvalidState`] if `state` is not exactly 32
    /// bytes or `byte_count` is not a multiple of 64.
    pub fn new_from_midstate(state: &[u8], byte_count: u64) -> Result<Self, MidstateError> {
        let midstate = Midstate::from_state_bytes(state, byte_count).map_err(|e| {
            tracing::debug!(error = %e, "midstate import rejected");
            e
        })?;
        Ok(Self::from_midstate(&midstate))
    }

    /// Resume from an already-validated snapshot.
    pub fn from_midstate(midstate: &Midstate) -> Self {
        tracing::trace!(byte_count = midstate.byte_count(), "midstate imported");
        Self {
            state: *midstate.words(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            byte_count: midstate.byte_count(),
        }
    }

    /// Absorb `data`. Any length, any content; never fails.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let mut data = data.as_ref();
        self.byte_count = self.byte_count.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let needed = BLOCK_LEN - self.buffer_len;
            if data.len() < needed {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }
            self.buffer[self.buffer_len..].copy_from_slice(&data[..needed]);
            compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
            data = &data[needed..];
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            let mut full = [0u8; BLOCK_LEN];
            full.copy_from_slice(block);
            compress(&mut self.state, &full);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Finish the message absorbed so far and return its digest.
    ///
    /// Does not modify the engine: calling `update` afterwards continues the
    /// same message, and a later `digest` covers the original input plus the
    /// new bytes. Two calls with no update in between return the same value.
    pub fn digest(&self) -> Sha256Digest {
        let mut state = self.state;
        let mut block = [0u8; BLOCK_LEN];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        // No room for the length field: flush this block and pad a fresh one.
        if self.buffer_len >= LENGTH_OFFSET {
            compress(&mut state, &block);
            block = [0u8; BLOCK_LEN];
        }

        let bit_len = self.byte_count.wrapping_mul(8);
        block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut state, &block);

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Sha256Digest::from_bytes(out)
    }

    /// [`Sha256Engine::digest`] rendered as 64 lowercase hex characters.
    pub fn hexdigest(&self) -> String {
        self.digest().to_hex()
    }

    /// Snapshot the accumulator and byte count.
    ///
    /// # Errors
    ///
    /// Returns [`MidstateError::StateBoundary`] if input is buffered, i.e.
    /// the bytes absorbed so far are not a whole number of blocks. The
    /// engine is unchanged either way.
    pub fn export_midstate(&self) -> Result<Midstate, MidstateError> {
        if self.buffer_len != 0 {
            tracing::debug!(pending = self.buffer_len, "midstate export rejected");
            return Err(MidstateError::StateBoundary {
                pending: self.buffer_len,
            });
        }
        tracing::trace!(byte_count = self.byte_count, "midstate exported");
        Ok(Midstate::from_parts(self.state, self.byte_count))
    }

    /// Total bytes absorbed, including any imported prefix.
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    /// Bytes buffered toward the next block (always below 64).
    pub fn pending_len(&self) -> usize {
        self.buffer_len
    }

    /// Whether [`Sha256Engine::export_midstate`] would succeed now.
    pub fn is_at_block_boundary(&self) -> bool {
        self.buffer_len == 0
    }
}

/// One-shot SHA-256 of `data`.
pub fn sha256(data: impl AsRef<[u8]>) -> Sha256Digest {
    Sha256Engine::with_data(data).digest()
}
