//! # Driving Ports (API - Inbound)
//!
//! What the host ledger runtime hands to the processor: an authenticated
//! transaction and a state handle. Payloads are validated here, at the
//! boundary, before any domain logic runs.

use crate::domain::entities::CollectionCreated;
use crate::domain::value_objects::{PublicKey, Signature};
use crate::errors::MojiError;
use crate::ports::outbound::StateStore;
use serde::Deserialize;
use std::fmt;

// =============================================================================
// TRANSACTION
// =============================================================================

/// Header fields the processor relies on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TransactionHeader {
    /// Public key of the authenticated signer.
    pub signer_public_key: Vec<u8>,
}

/// An authenticated transaction as delivered by the host runtime.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Transaction {
    /// Signed header.
    pub header: TransactionHeader,
    /// Signature over the header. Seeds DNA generation.
    pub signature: Vec<u8>,
    /// Family-specific payload (JSON).
    pub payload: Vec<u8>,
}

impl Transaction {
    /// Builds a transaction from raw parts.
    pub fn new(
        signer_public_key: impl Into<Vec<u8>>,
        signature: impl Into<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            header: TransactionHeader {
                signer_public_key: signer_public_key.into(),
            },
            signature: signature.into(),
            payload: payload.into(),
        }
    }

    /// Signer key as lowercase hex, for logs and rejections.
    #[must_use]
    pub fn signer_hex(&self) -> String {
        hex::encode(&self.header.signer_public_key)
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Actions understood by this processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MojiAction {
    /// Mint a collection of moji for the signer.
    CreateCollection,
}

impl MojiAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateCollection => "CREATE_COLLECTION",
        }
    }
}

impl fmt::Display for MojiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct RawPayload {
    action: String,
}

/// Decodes a JSON payload of the form `{"action": "..."}`.
pub fn decode_payload(payload: &[u8]) -> Result<MojiAction, MojiError> {
    let raw: RawPayload =
        serde_json::from_slice(payload).map_err(|e| MojiError::MalformedInput {
            reason: format!("payload is not a valid action object: {e}"),
        })?;

    match raw.action.as_str() {
        "CREATE_COLLECTION" => Ok(MojiAction::CreateCollection),
        _ => Err(MojiError::InvalidAction { action: raw.action }),
    }
}

// =============================================================================
// VALIDATED COMMANDS
// =============================================================================

/// A create-collection request with all required fields present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCollection {
    /// Collection owner.
    pub owner: PublicKey,
    /// Transaction signature; the only entropy source.
    pub signature: Signature,
}

impl CreateCollection {
    /// Validates the identity and signature of `txn`.
    pub fn from_transaction(txn: &Transaction) -> Result<Self, MojiError> {
        let owner = PublicKey::new(txn.header.signer_public_key.clone()).ok_or_else(|| {
            MojiError::MalformedInput {
                reason: "transaction has no signer public key".to_string(),
            }
        })?;
        let signature =
            Signature::new(txn.signature.clone()).ok_or_else(|| MojiError::MalformedInput {
                reason: format!("transaction from {owner} has no signature"),
            })?;
        Ok(Self { owner, signature })
    }
}

// =============================================================================
// HANDLER PORT
// =============================================================================

/// Outcome of a successfully applied transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// A collection and its moji were committed.
    CollectionCreated(CollectionCreated),
}

/// Transaction family handler, as registered with the host runtime.
pub trait TransactionHandler: Send + Sync {
    /// Family name.
    fn family_name(&self) -> &str;

    /// Supported family versions.
    fn family_versions(&self) -> Vec<String>;

    /// State namespaces this family reads and writes.
    fn namespaces(&self) -> Vec<String>;

    /// Applies one transaction to state.
    ///
    /// On `Err` nothing has been written.
    fn apply(&self, txn: &Transaction, store: &dyn StateStore) -> Result<ApplyOutcome, MojiError>;
}

// =============================================================================
// TESTS
// =============================================================================
