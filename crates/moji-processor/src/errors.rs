//! # Error Types
//!
//! All error types for the cryptomoji processor.

use crate::domain::value_objects::Address;
use crate::ports::outbound::StoreError;
use thiserror::Error;

// =============================================================================
// HANDLER ERRORS
// =============================================================================

/// Errors that can abort a state transition.
///
/// Every variant is raised before the write batch is submitted, except
/// `StoreUnavailable` coming from the batch itself, in which case the
/// store's atomicity guarantees nothing was written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MojiError {
    /// Transaction is missing required fields or has an undecodable payload.
    #[error("malformed transaction: {reason}")]
    MalformedInput { reason: String },

    /// Payload names an action this processor does not handle.
    #[error("unsupported action: {action}")]
    InvalidAction { action: String },

    /// The signer already owns a collection.
    #[error("public key {public_key} already has a collection")]
    DuplicateIdentity { public_key: String },

    /// A generated moji address is already occupied.
    #[error("moji address collision at {address} for public key {public_key}")]
    AddressCollision { address: Address, public_key: String },

    /// The proposed write set broke a structural invariant.
    #[error("invariant violated for public key {public_key}: {violation}")]
    InvariantViolated { public_key: String, violation: String },

    /// State store failed to serve a read or write.
    #[error("state store error: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// A record could not be encoded or decoded.
    #[error("record codec error: {0}")]
    Codec(#[from] CodecError),
}

/// How the host runtime should treat a failed transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Business rejection; the transaction is invalid and will never apply.
    InvalidTransaction,
    /// Integrity or infrastructure failure; operators must look.
    Internal,
}

impl MojiError {
    /// Classifies the error for the host runtime.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. }
            | Self::InvalidAction { .. }
            | Self::DuplicateIdentity { .. } => ErrorKind::InvalidTransaction,
            Self::AddressCollision { .. }
            | Self::InvariantViolated { .. }
            | Self::StoreUnavailable(_)
            | Self::Codec(_) => ErrorKind::Internal,
        }
    }

    /// Returns true for expected business rejections.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        self.kind() == ErrorKind::InvalidTransaction
    }
}

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Errors from the persisted record encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Empty input.
    #[error("empty record")]
    Empty,

    /// Record carries a version this build does not read.
    #[error("unsupported record version: {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    /// Body failed to (de)serialize, including field validation on decode.
    #[error("serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
