//! # SHA-256 Digest Value
//!
//! `Sha256Digest` is the 32-byte output of a finished hash. It renders as
//! 64 lowercase hex characters and serializes that way through serde, so a
//! digest written to JSON reads the same as `hexdigest()` output.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::constants::DIGEST_LEN;
use crate::hex;

/// A finished SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

/// Error parsing a digest from its hex form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid SHA-256 digest: {0}")]
pub struct DigestParseError(String);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning its bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as a lowercase hex string of 64 characters.
    pub fn to_hex(&self) -> String {
        hex::to_hex(&self.0)
    }

    /// Parse a digest from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        let bytes = hex::from_hex(s).map_err(DigestParseError)?;
        let bytes: [u8; DIGEST_LEN] = bytes.as_slice().try_into().map_err(|_| {
            DigestParseError(format!("expected {DIGEST_LEN} bytes, got {}", bytes.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl Deref for Sha256Digest {
    type Target = [u8; DIGEST_LEN];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Sha256Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Sha256Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
