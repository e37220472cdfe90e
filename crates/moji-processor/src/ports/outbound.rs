//! # Driven Ports (SPI - Outbound)
//!
//! The ledger state the handler reads from and writes to.
//!
//! Production: `RocksDbStateStore` (`adapters/rocksdb_store.rs`, `rocksdb` feature)
//! Testing: `InMemoryStateStore` (`adapters/memory_store.rs`)

use crate::domain::value_objects::Address;
use std::collections::btree_map::{self, BTreeMap};
use thiserror::Error;

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Failures reported by a state store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not serve the request.
    #[error("state store unavailable: {0}")]
    Unavailable(String),

    /// A batch write was rejected; nothing from it is visible.
    #[error("state batch rejected: {0}")]
    BatchRejected(String),

    /// Internal lock was poisoned by a panicking writer.
    #[error("state store lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// STATE BATCH
// =============================================================================

/// Set of writes applied all-or-nothing.
///
/// Entries are kept in address order so every node hands the backend an
/// identical batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateBatch {
    entries: BTreeMap<Address, Vec<u8>>,
}

impl StateBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a write. Returns the value previously queued at `address`.
    pub fn insert(&mut self, address: Address, data: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(address, data)
    }

    /// Whether a write is queued at `address`.
    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.entries.contains_key(address)
    }

    /// Number of queued writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued addresses, in order.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.entries.keys()
    }

    /// Borrowing iterator over queued writes.
    pub fn iter(&self) -> btree_map::Iter<'_, Address, Vec<u8>> {
        self.entries.iter()
    }
}

impl IntoIterator for StateBatch {
    type Item = (Address, Vec<u8>);
    type IntoIter = btree_map::IntoIter<Address, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// STATE STORE
// =============================================================================

/// Key-value ledger state addressed by 70-character hex addresses.
///
/// ## Contract
///
/// - `get` observes every batch committed before it (read-your-writes).
/// - `set_batch` is atomic: either every entry becomes visible or none does.
pub trait StateStore: Send + Sync {
    /// Reads the bytes stored at `address`.
    fn get(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError>;

    /// Applies every write in `batch` atomically.
    fn set_batch(&self, batch: StateBatch) -> Result<(), StoreError>;

    /// Whether anything is stored at `address`.
    fn contains(&self, address: &Address) -> Result<bool, StoreError> {
        Ok(self.get(address)?.is_some())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn get(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(address)
    }

    fn set_batch(&self, batch: StateBatch) -> Result<(), StoreError> {
        (**self).set_batch(batch)
    }
}

impl<S: StateStore + ?Sized> StateStore for std::sync::Arc<S> {
    fn get(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(address)
    }

    fn set_batch(&self, batch: StateBatch) -> Result<(), StoreError> {
        (**self).set_batch(batch)
    }
}

// =============================================================================
// TESTS
// =============================================================================
