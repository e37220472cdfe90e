//! # Address Derivation
//!
//! Pure, deterministic mapping from identities and generated content to
//! state addresses. Every address is `namespace ++ kind ++ body`, 70 lowercase
//! hex characters, with the body taken from SHA-512 digests:
//!
//! ```text
//! collection: 5f4d76 00 sha512(identity)[..62]
//! moji:       5f4d76 01 sha512(identity)[..8] sha512(dna)[..54]
//! ```
//!
//! The 8-character owner segment keeps all of one owner's moji under a
//! common prefix (see [`moji_prefix`]).

use crate::domain::value_objects::{
    Address, AddressKind, Dna, PublicKey, ADDRESS_LENGTH, FAMILY_NAMESPACE, KIND_PREFIX_LENGTH,
    NAMESPACE_LENGTH,
};
use sha2::{Digest, Sha512};

/// Hex characters of the address body.
pub const BODY_LENGTH: usize = ADDRESS_LENGTH - NAMESPACE_LENGTH - KIND_PREFIX_LENGTH;

/// Owner segment width when a discriminator is present.
pub const OWNER_SEGMENT_LENGTH: usize = 8;

/// Discriminator segment width.
pub const DISCRIMINATOR_SEGMENT_LENGTH: usize = BODY_LENGTH - OWNER_SEGMENT_LENGTH;

/// Lowercase hex SHA-512 digest.
#[must_use]
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// Derives an address from a kind, an identity and an optional discriminator.
///
/// Without a discriminator the body is the first 62 hex characters of the
/// identity digest. With one, the body is 8 characters of the identity
/// digest followed by 54 characters of the discriminator digest.
#[must_use]
pub fn derive_address(kind: AddressKind, identity: &[u8], discriminator: Option<&[u8]>) -> Address {
    let identity_hash = sha512_hex(identity);
    let body = match discriminator {
        None => identity_hash[..BODY_LENGTH].to_string(),
        Some(d) => {
            let d_hash = sha512_hex(d);
            let mut body = String::with_capacity(BODY_LENGTH);
            body.push_str(&identity_hash[..OWNER_SEGMENT_LENGTH]);
            body.push_str(&d_hash[..DISCRIMINATOR_SEGMENT_LENGTH]);
            body
        }
    };
    Address::from_parts(kind, &body)
}

/// Address of the collection owned by `owner`.
#[must_use]
pub fn collection_address(owner: &PublicKey) -> Address {
    derive_address(AddressKind::Collection, owner.as_bytes(), None)
}

/// Address of the moji with `dna` owned by `owner`.
#[must_use]
pub fn moji_address(owner: &PublicKey, dna: &Dna) -> Address {
    derive_address(AddressKind::Moji, owner.as_bytes(), Some(dna.as_bytes()))
}

/// Prefix shared by every moji address of `owner`.
#[must_use]
pub fn moji_prefix(owner: &PublicKey) -> String {
    let identity_hash = sha512_hex(owner.as_bytes());
    format!(
        "{FAMILY_NAMESPACE}{}{}",
        AddressKind::Moji.prefix(),
        &identity_hash[..OWNER_SEGMENT_LENGTH]
    )
}

/// Namespace prefix the family registers with the host runtime.
#[must_use]
pub fn namespace() -> &'static str {
    FAMILY_NAMESPACE
}

// =============================================================================
// TESTS
// =============================================================================
