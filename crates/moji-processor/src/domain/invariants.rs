//! # Domain Invariants
//!
//! Structural checks over a collection and the moji it references. The
//! handler runs them on every proposed write set before committing; tests
//! run them against committed state.

use crate::domain::addressing::collection_address;
use crate::domain::entities::{Collection, Moji, MOJI_PER_COLLECTION};
use crate::domain::value_objects::{Address, AddressKind};
use std::collections::HashSet;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// A collection references exactly [`MOJI_PER_COLLECTION`] moji.
#[must_use]
pub fn check_cardinality_invariant(collection: &Collection) -> bool {
    collection.moji.len() == MOJI_PER_COLLECTION
}

/// Every child address is a distinct moji address.
#[must_use]
pub fn check_distinct_children_invariant(collection: &Collection) -> bool {
    let mut seen = HashSet::with_capacity(collection.moji.len());
    collection
        .moji
        .iter()
        .all(|address| address.kind() == AddressKind::Moji && seen.insert(address))
}

/// Each referenced child is derivable from (owner, dna) and owned by the
/// collection's key. `children` must be in the same order as
/// `collection.moji`.
#[must_use]
pub fn check_children_derivable_invariant(collection: &Collection, children: &[Moji]) -> bool {
    collection.moji.len() == children.len()
        && collection
            .moji
            .iter()
            .zip(children)
            .all(|(address, moji)| moji.owner == collection.key && *address == moji.address())
}

/// The collection sits at the address derived from its key.
#[must_use]
pub fn check_collection_address_invariant(address: &Address, collection: &Collection) -> bool {
    *address == collection_address(&collection.key)
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(
    address: &Address,
    collection: &Collection,
    children: &[Moji],
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_collection_address_invariant(address, collection) {
        violations.push(InvariantViolation::MisplacedCollection {
            address: address.clone(),
        });
    }

    if !check_cardinality_invariant(collection) {
        violations.push(InvariantViolation::WrongCardinality {
            expected: MOJI_PER_COLLECTION,
            actual: collection.moji.len(),
        });
    }

    if !check_distinct_children_invariant(collection) {
        violations.push(InvariantViolation::DuplicateChild);
    }

    if !check_children_derivable_invariant(collection, children) {
        violations.push(InvariantViolation::UnderivableChild);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Collection is not at its derived address.
    MisplacedCollection { address: Address },
    /// Wrong number of children.
    WrongCardinality { expected: usize, actual: usize },
    /// Two children share an address, or a child is not a moji address.
    DuplicateChild,
    /// A child address does not match its owner and DNA.
    UnderivableChild,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MisplacedCollection { address } => {
                write!(f, "collection stored at non-derived address {address}")
            }
            Self::WrongCardinality { expected, actual } => {
                write!(f, "collection holds {actual} moji, expected {expected}")
            }
            Self::DuplicateChild => write!(f, "collection references a moji address twice"),
            Self::UnderivableChild => {
                write!(f, "moji address does not match owner and dna")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
