//! # Error Types
//!
//! Structured errors for midstate import and export. Uses `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Absorbing input never fails: SHA-256 is total over all byte sequences,
//! so only the snapshot protocol has error paths. Every rejected operation
//! leaves the engine exactly as it was before the call.

use thiserror::Error;

/// Errors from the midstate export/import protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MidstateError {
    /// A state blob or encoded snapshot could not be decoded.
    #[error("invalid midstate: {0}")]
    InvalidState(String),

    /// Export attempted while input bytes were still buffered.
    #[error("midstate export requires a block boundary: {pending} byte(s) pending")]
    StateBoundary {
        /// Number of buffered bytes that have not yet formed a full block.
        pending: usize,
    },
}

impl MidstateError {
    pub(crate) fn wrong_length(what: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidState(format!("{what} must be {expected} bytes, got {actual}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_error_display() {
        let err = MidstateError::StateBoundary { pending: 3 };
        assert_eq!(
            err.to_string(),
            "midstate export requires a block boundary: 3 byte(s) pending"
        );
    }

    #[test]
    fn test_wrong_length_display() {
        let err = MidstateError::wrong_length("state blob", 32, 31);
        assert_eq!(
            err.to_string(),
            "invalid midstate: state blob must be 32 bytes, got 31"
        );
    }
}
