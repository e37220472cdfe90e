//! # Cryptomoji Handler
//!
//! The state transition for `CREATE_COLLECTION`.
//!
//! ## Flow
//!
//! 1. Decode the payload and validate signer key and signature
//! 2. Reject if the signer's collection address is occupied
//! 3. Seed the generator with the signature, mint three moji in order
//! 4. Reject if any moji address is occupied (integrity failure)
//! 5. Check structural invariants on the proposed records
//! 6. Submit collection and moji as one atomic batch
//!
//! Every failure happens before step 6, so a rejected transaction never
//! leaves partial state behind.
//!
//! Moji and collection addresses differ in their kind prefix, so a moji can
//! only collide with another moji. An occupied moji address is a fatal
//! integrity anomaly, never a normal rejection.

use crate::codec::Record;
use crate::config::{ConfigError, ProcessorConfig};
use crate::domain::addressing::{collection_address, namespace};
use crate::domain::entities::{Collection, CollectionCreated, MOJI_PER_COLLECTION};
use crate::domain::factory::make_moji_batch;
use crate::domain::generator::SeededGenerator;
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::errors::MojiError;
use crate::ports::inbound::{
    decode_payload, ApplyOutcome, CreateCollection, MojiAction, Transaction, TransactionHandler,
};
use crate::ports::outbound::{StateBatch, StateStore};
use tracing::{debug, error, info, instrument, warn};

/// Transaction handler for the cryptomoji family.
#[derive(Debug, Clone)]
pub struct MojiHandler {
    config: ProcessorConfig,
}

impl Default for MojiHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MojiHandler {
    /// Handler with the default family registration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::default(),
        }
    }

    /// Handler with a validated custom configuration.
    pub fn with_config(config: ProcessorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Creates the signer's collection and its moji.
    pub fn create_collection(
        &self,
        cmd: &CreateCollection,
        store: &dyn StateStore,
    ) -> Result<CollectionCreated, MojiError> {
        let owner = &cmd.owner;
        let collection_addr = collection_address(owner);
        debug!(collection = %collection_addr, "derived collection address");

        if store.get(&collection_addr)?.is_some() {
            return Err(MojiError::DuplicateIdentity {
                public_key: owner.to_hex(),
            });
        }

        let generator = SeededGenerator::from_signature(&cmd.signature);
        let (minted, _) = make_moji_batch(owner, generator, MOJI_PER_COLLECTION);

        let mut batch = StateBatch::new();
        let mut moji_addresses = Vec::with_capacity(minted.len());
        let mut dna = Vec::with_capacity(minted.len());
        let mut children = Vec::with_capacity(minted.len());

        for m in minted {
            debug!(moji = %m.address, dna = %m.moji.dna, "minted moji");

            let occupied = store.contains(&m.address)?;
            if occupied || batch.insert(m.address.clone(), m.moji.encode()?).is_some() {
                return Err(MojiError::AddressCollision {
                    address: m.address,
                    public_key: owner.to_hex(),
                });
            }

            moji_addresses.push(m.address);
            dna.push(m.moji.dna);
            children.push(m.moji);
        }

        let collection = Collection::new(owner.clone(), moji_addresses.clone());
        if let InvariantCheckResult::Invalid(violations) =
            check_all_invariants(&collection_addr, &collection, &children)
        {
            let violation = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(MojiError::InvariantViolated {
                public_key: owner.to_hex(),
                violation,
            });
        }

        batch.insert(collection_addr.clone(), collection.encode()?);
        store.set_batch(batch)?;

        Ok(CollectionCreated {
            collection: collection_addr,
            moji: moji_addresses,
            dna,
        })
    }
}

impl TransactionHandler for MojiHandler {
    fn family_name(&self) -> &str {
        &self.config.family_name
    }

    fn family_versions(&self) -> Vec<String> {
        vec![self.config.family_version.clone()]
    }

    fn namespaces(&self) -> Vec<String> {
        vec![namespace().to_string()]
    }

    #[instrument(skip(self, txn, store), fields(signer = %txn.signer_hex()))]
    fn apply(&self, txn: &Transaction, store: &dyn StateStore) -> Result<ApplyOutcome, MojiError> {
        let result = decode_payload(&txn.payload).and_then(|action| match action {
            MojiAction::CreateCollection => {
                let cmd = CreateCollection::from_transaction(txn)?;
                self.create_collection(&cmd, store)
                    .map(ApplyOutcome::CollectionCreated)
            }
        });

        match &result {
            Ok(ApplyOutcome::CollectionCreated(created)) => {
                info!(
                    collection = %created.collection,
                    moji = created.moji.len(),
                    "collection created"
                );
            }
            Err(err) if err.is_rejection() => warn!(%err, "transaction rejected"),
            Err(err) => error!(%err, "transaction failed"),
        }

        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
