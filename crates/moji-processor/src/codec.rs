//! # Record Codec
//!
//! Persisted layout of every record:
//!
//! ```text
//! [version: u8 = 1][bincode body: fixed-width ints, little endian]
//! ```
//!
//! String-typed fields (keys, addresses, DNA) are validated on decode, and
//! trailing bytes are rejected, so `decode` is the exact inverse of `encode`.

use crate::domain::entities::{Collection, Moji};
use crate::errors::CodecError;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Current record layout version.
pub const RECORD_VERSION: u8 = 1;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// A record that can be stored in state.
pub trait Record: Serialize + DeserializeOwned {
    /// Encodes the record with its version byte.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let body = options()
            .serialize(self)
            .map_err(|e| CodecError::Serialization(e.to_string()))?;
        let mut out = Vec::with_capacity(body.len() + 1);
        out.push(RECORD_VERSION);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Decodes a record produced by [`Record::encode`].
    fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let (&version, body) = data.split_first().ok_or(CodecError::Empty)?;
        if version != RECORD_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: version,
                expected: RECORD_VERSION,
            });
        }
        options()
            .deserialize(body)
            .map_err(|e| CodecError::Serialization(e.to_string()))
    }
}

impl Record for Collection {}
impl Record for Moji {}

// =============================================================================
// TESTS
// =============================================================================
