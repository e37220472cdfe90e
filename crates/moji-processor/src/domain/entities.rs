//! # Domain Entities
//!
//! Records persisted in state by the cryptomoji family.

use crate::domain::addressing::{collection_address, moji_address};
use crate::domain::value_objects::{Address, Dna, PublicKey};
use serde::{Deserialize, Serialize};

/// Number of moji minted with every new collection.
pub const MOJI_PER_COLLECTION: usize = 3;

// =============================================================================
// COLLECTION
// =============================================================================

/// Per-identity parent record.
///
/// Holds the owner key and the addresses of the owner's moji, in the order
/// they were generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Owner public key.
    pub key: PublicKey,
    /// Addresses of owned moji.
    pub moji: Vec<Address>,
}

impl Collection {
    /// Creates a collection record.
    #[must_use]
    pub fn new(key: PublicKey, moji: Vec<Address>) -> Self {
        Self { key, moji }
    }

    /// Address this collection lives at.
    #[must_use]
    pub fn address(&self) -> Address {
        collection_address(&self.key)
    }
}

// =============================================================================
// MOJI
// =============================================================================

/// A generated child entity.
///
/// The lineage fields are always empty for freshly minted moji; breeding
/// actions fill them in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moji {
    /// Generated traits.
    pub dna: Dna,
    /// Owner public key.
    pub owner: PublicKey,
    /// Sire moji, if bred.
    pub sire: Option<Address>,
    /// Breeder moji, if bred.
    pub breeder: Option<Address>,
    /// Offspring sired by this moji.
    pub sired: Vec<Address>,
    /// Offspring bred by this moji.
    pub bred: Vec<Address>,
}

impl Moji {
    /// A freshly minted moji with no lineage.
    #[must_use]
    pub fn new(dna: Dna, owner: PublicKey) -> Self {
        Self {
            dna,
            owner,
            sire: None,
            breeder: None,
            sired: Vec::new(),
            bred: Vec::new(),
        }
    }

    /// Address recomputed from owner and DNA.
    #[must_use]
    pub fn address(&self) -> Address {
        moji_address(&self.owner, &self.dna)
    }
}

// =============================================================================
// TRANSITION OUTCOME
// =============================================================================

/// Summary of a committed collection creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionCreated {
    /// Address of the new collection.
    pub collection: Address,
    /// Addresses of the new moji, in generation order.
    pub moji: Vec<Address>,
    /// DNA of the new moji, in generation order.
    pub dna: Vec<Dna>,
}
