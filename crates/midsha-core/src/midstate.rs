//! # Midstate Snapshots
//!
//! A [`Midstate`] is an immutable snapshot of a hash computation taken at a
//! 64-byte block boundary: the eight accumulator words plus the number of
//! message bytes already absorbed. It is the only way progress moves between
//! engine instances; there is no shared mutable state.
//!
//! ## Wire forms
//!
//! - **State blob** (32 bytes): the accumulator words, big-endian. Paired
//!   with an out-of-band byte count via [`Midstate::from_state_bytes`].
//! - **Encoded snapshot** (40 bytes): state blob followed by the byte count
//!   as a big-endian `u64`. Self-contained; see [`Midstate::encode`].
//! - **JSON**: `{"state": "<64 hex>", "byte_count": <u64>}`.
//!
//! ## Invariant
//!
//! `byte_count` is always a multiple of 64. A snapshot with a partial block
//! behind it cannot be resumed correctly, so construction rejects it.

use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_LEN, STATE_WORDS};
use crate::error::MidstateError;
use crate::hex;

/// Length of the accumulator state blob in bytes.
pub const STATE_LEN: usize = STATE_WORDS * 4;

/// Length of an encoded snapshot (state blob plus byte count) in bytes.
pub const ENCODED_LEN: usize = STATE_LEN + 8;

/// Accumulator state and byte count captured at a block boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MidstateRepr", into = "MidstateRepr")]
pub struct Midstate {
    words: [u32; STATE_WORDS],
    byte_count: u64,
}

impl Midstate {
    /// Build a snapshot from words the engine already holds.
    pub(crate) fn from_parts(words: [u32; STATE_WORDS], byte_count: u64) -> Self {
        debug_assert_eq!(byte_count % BLOCK_LEN as u64, 0);
        Self { words, byte_count }
    }

    /// Parse a 32-byte state blob and pair it with the number of bytes the
    /// exporting engine had absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`MidstateError::InvalidState`] if `state` is not exactly
    /// 32 bytes or `byte_count` is not a multiple of 64.
    pub fn from_state_bytes(state: &[u8], byte_count: u64) -> Result<Self, MidstateError> {
        if state.len() != STATE_LEN {
            return Err(MidstateError::wrong_length("state blob", STATE_LEN, state.len()));
        }
        if byte_count % BLOCK_LEN as u64 != 0 {
            return Err(MidstateError::InvalidState(format!(
                "byte count {byte_count} is not a multiple of {BLOCK_LEN}"
            )));
        }
        let mut words = [0u32; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(state.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self { words, byte_count })
    }

    /// The accumulator words H0..H7.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Total message bytes absorbed when the snapshot was taken.
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    /// The 32-byte state blob: accumulator words serialized big-endian.
    pub fn state_bytes(&self) -> [u8; STATE_LEN] {
        let mut out = [0u8; STATE_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Self-contained 40-byte encoding: state blob then big-endian byte count.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[..STATE_LEN].copy_from_slice(&self.state_bytes());
        out[STATE_LEN..].copy_from_slice(&self.byte_count.to_be_bytes());
        out
    }

    /// Decode the 40-byte form produced by [`Midstate::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`MidstateError::InvalidState`] on a wrong length or a byte
    /// count that is not block-aligned.
    pub fn decode(bytes: &[u8]) -> Result<Self, MidstateError> {
        if bytes.len() != ENCODED_LEN {
            return Err(MidstateError::wrong_length(
                "encoded midstate",
                ENCODED_LEN,
                bytes.len(),
            ));
        }
        let (state, count) = bytes.split_at(STATE_LEN);
        let mut count_be = [0u8; 8];
        count_be.copy_from_slice(count);
        Self::from_state_bytes(state, u64::from_be_bytes(count_be))
    }

    /// Hex rendering of [`Midstate::encode`] (80 characters).
    pub fn to_hex(&self) -> String {
        hex::to_hex(&self.encode())
    }

    /// Parse the hex form produced by [`Midstate::to_hex`].
    pub fn from_hex(s: &str) -> Result<Self, MidstateError> {
        let bytes = hex::from_hex(s).map_err(MidstateError::InvalidState)?;
        Self::decode(&bytes)
    }
}

/// JSON shape of a snapshot.
#[derive(Serialize, Deserialize)]
struct MidstateRepr {
    state: String,
    byte_count: u64,
}

impl From<Midstate> for MidstateRepr {
    fn from(m: Midstate) -> Self {
        Self {
            state: hex::to_hex(&m.state_bytes()),
            byte_count: m.byte_count,
        }
    }
}

impl TryFrom<MidstateRepr> for Midstate {
    type Error = MidstateError;

    fn try_from(repr: MidstateRepr) -> Result<Self, Self::Error> {
        let state = hex::from_hex(&repr.state).map_err(MidstateError::InvalidState)?;
        Self::from_state_bytes(&state, repr.byte_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::H0;

    fn sample() -> Midstate {
        Midstate::from_parts(H0, 128)
    }

    #[test]
    fn test_state_bytes_are_big_endian_words() {
        let bytes = sample().state_bytes();
        assert_eq!(&bytes[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&bytes[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
    }

    #[test]
    fn test_from_state_bytes_round_trip() {
        let m = sample();
        let back = Midstate::from_state_bytes(&m.state_bytes(), m.byte_count()).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.words(), &H0);
    }

    #[test]
    fn test_from_state_bytes_rejects_wrong_length() {
        let err = Midstate::from_state_bytes(&[0u8; 31], 0).unwrap_err();
        assert!(matches!(err, MidstateError::InvalidState(_)));
        assert!(Midstate::from_state_bytes(&[0u8; 33], 0).is_err());
        assert!(Midstate::from_state_bytes(&[], 0).is_err());
    }

    #[test]
    fn test_from_state_bytes_rejects_unaligned_count() {
        let err = Midstate::from_state_bytes(&[0u8; STATE_LEN], 65).unwrap_err();
        assert_eq!(
            err,
            MidstateError::InvalidState("byte count 65 is not a multiple of 64".into())
        );
    }

    #[test]
    fn test_encode_layout() {
        let encoded = sample().encode();
        assert_eq!(encoded.len(), ENCODED_LEN);
        assert_eq!(&encoded[STATE_LEN..], &128u64.to_be_bytes());
        assert_eq!(Midstate::decode(&encoded).unwrap(), sample());
    }

    #[test]
    fn test_decode_rejects_bare_state_blob() {
        let blob = sample().state_bytes();
        assert!(Midstate::decode(&blob).is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let hex = sample().to_hex();
        assert_eq!(hex.len(), ENCODED_LEN * 2);
        assert_eq!(Midstate::from_hex(&hex).unwrap(), sample());
        assert!(Midstate::from_hex(&hex[..78]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json["state"],
            "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19"
        );
        assert_eq!(json["byte_count"], 128);
        let back: Midstate = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_json_rejects_malformed_state() {
        let bad = serde_json::json!({"state": "abcd", "byte_count": 64});
        assert!(serde_json::from_value::<Midstate>(bad).is_err());
        let unaligned = serde_json::json!({
            "state": "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19",
            "byte_count": 3
        });
        assert!(serde_json::from_value::<Midstate>(unaligned).is_err());
    }
}
