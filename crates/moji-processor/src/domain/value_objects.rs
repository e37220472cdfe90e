//! # Value Objects
//!
//! Immutable domain primitives for the cryptomoji family.
//! These types are defined by their value, never by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ADDRESS LAYOUT
// =============================================================================

/// Total length of every state address, in hex characters.
pub const ADDRESS_LENGTH: usize = 70;

/// Length of the family namespace prefix, in hex characters.
pub const NAMESPACE_LENGTH: usize = 6;

/// Length of the kind prefix following the namespace.
pub const KIND_PREFIX_LENGTH: usize = 2;

/// Family namespace: first 6 hex characters of `SHA-512("cryptomoji")`.
pub const FAMILY_NAMESPACE: &str = "5f4d76";

/// Number of raw bytes in a DNA value.
pub const DNA_BYTES: usize = 18;

/// Length of a DNA value rendered as hex.
pub const DNA_HEX_LENGTH: usize = DNA_BYTES * 2;

/// Number of 16-bit genes packed into a DNA value.
pub const GENE_COUNT: usize = DNA_BYTES / 2;

// =============================================================================
// PUBLIC KEY (signer identity)
// =============================================================================

/// Authenticated signer public key.
///
/// Opaque bytes; the signature subsystem is responsible for their format.
/// Persisted as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Wraps raw public key bytes. Returns `None` for an empty key.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Parses a hex-encoded public key.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        hex::decode(s).ok().and_then(Self::new)
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering, as persisted in records.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for PublicKey {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_lower_hex(&value) {
            return Err(InvalidValue::PublicKey(value));
        }
        Self::from_hex(&value).ok_or(InvalidValue::PublicKey(value))
    }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self {
        key.to_hex()
    }
}

// =============================================================================
// SIGNATURE (generator seed)
// =============================================================================

/// Transaction signature bytes. Only ever used to seed DNA generation.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Wraps raw signature bytes. Returns `None` for an empty signature.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Returns the raw signature bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0))
    }
}

// =============================================================================
// DNA
// =============================================================================

/// Generated moji traits: 18 bytes, persisted as 36 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dna([u8; DNA_BYTES]);

impl Dna {
    /// Creates DNA from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DNA_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parses a 36-character lowercase hex string.
    pub fn from_hex(s: &str) -> Result<Self, InvalidValue> {
        if s.len() != DNA_HEX_LENGTH || !is_lower_hex(s) {
            return Err(InvalidValue::Dna(s.to_string()));
        }
        let mut bytes = [0u8; DNA_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidValue::Dna(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DNA_BYTES] {
        &self.0
    }

    /// Lowercase hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Splits the DNA into nine big-endian 16-bit genes.
    #[must_use]
    pub fn genes(&self) -> [u16; GENE_COUNT] {
        let mut genes = [0u16; GENE_COUNT];
        for (gene, pair) in genes.iter_mut().zip(self.0.chunks_exact(2)) {
            *gene = u16::from_be_bytes([pair[0], pair[1]]);
        }
        genes
    }
}

impl fmt::Debug for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dna({})", self.to_hex())
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Dna {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Dna> for String {
    fn from(dna: Dna) -> Self {
        dna.to_hex()
    }
}

// =============================================================================
// ADDRESS (70 hex chars)
// =============================================================================

/// Record kind encoded in the two characters after the namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Per-identity collection record (`00`).
    Collection,
    /// Generated moji record (`01`).
    Moji,
}

impl AddressKind {
    /// The two-character kind prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Collection => "00",
            Self::Moji => "01",
        }
    }

    /// Looks up a kind from its prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "00" => Some(Self::Collection),
            "01" => Some(Self::Moji),
            _ => None,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("collection"),
            Self::Moji => f.write_str("moji"),
        }
    }
}

/// A validated state address.
///
/// Layout: `namespace(6) ++ kind(2) ++ body(62)`, lowercase hex throughout.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Validates and wraps an address string.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidValue> {
        let s = s.into();
        if s.len() != ADDRESS_LENGTH || !is_lower_hex(&s) || !s.starts_with(FAMILY_NAMESPACE) {
            return Err(InvalidValue::Address(s));
        }
        if AddressKind::from_prefix(&s[NAMESPACE_LENGTH..NAMESPACE_LENGTH + KIND_PREFIX_LENGTH])
            .is_none()
        {
            return Err(InvalidValue::Address(s));
        }
        Ok(Self(s))
    }

    /// Builds an address from parts the deriver has already validated.
    pub(crate) fn from_parts(kind: AddressKind, body: &str) -> Self {
        debug_assert_eq!(
            body.len(),
            ADDRESS_LENGTH - NAMESPACE_LENGTH - KIND_PREFIX_LENGTH
        );
        let mut s = String::with_capacity(ADDRESS_LENGTH);
        s.push_str(FAMILY_NAMESPACE);
        s.push_str(kind.prefix());
        s.push_str(body);
        Self(s)
    }

    /// The record kind this address points at.
    #[must_use]
    pub fn kind(&self) -> AddressKind {
        // Constructors guarantee a known prefix.
        match &self.0[NAMESPACE_LENGTH..NAMESPACE_LENGTH + KIND_PREFIX_LENGTH] {
            "00" => AddressKind::Collection,
            _ => AddressKind::Moji,
        }
    }

    /// Returns the address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// A string failed value-object validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValue {
    /// Not a non-empty lowercase hex public key.
    #[error("invalid public key: {0:?}")]
    PublicKey(String),

    /// Not a 70-character cryptomoji address.
    #[error("invalid address: {0:?}")]
    Address(String),

    /// Not a 36-character lowercase hex DNA string.
    #[error("invalid dna: {0:?}")]
    Dna(String),
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

// =============================================================================
// TESTS
// =============================================================================
