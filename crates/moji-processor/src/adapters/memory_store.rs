//! # In-Memory State Store
//!
//! `StateStore` over a `BTreeMap` behind a `RwLock`. A batch is applied
//! under a single write lock, so readers see all of it or none of it.

use crate::domain::value_objects::Address;
use crate::ports::outbound::{StateBatch, StateStore, StoreError};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory implementation of `StateStore` for testing.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: RwLock<BTreeMap<Address, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the entry at `address`, returning it.
    pub fn remove(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.remove(address))
    }

    /// Copy of the full state, in address order.
    pub fn snapshot(&self) -> Result<BTreeMap<Address, Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.clone())
    }

    /// Entries whose address starts with `prefix`.
    pub fn scan_prefix(&self, prefix: &str) -> Result<Vec<(Address, Vec<u8>)>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .filter(|(address, _)| address.as_str().starts_with(prefix))
            .map(|(address, data)| (address.clone(), data.clone()))
            .collect())
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(address).cloned())
    }

    fn set_batch(&self, batch: StateBatch) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        for (address, data) in batch {
            entries.insert(address, data);
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
