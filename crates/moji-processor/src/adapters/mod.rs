//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete `StateStore` implementations.
//!
//! - `InMemoryStateStore`: tests and embedded use
//! - `RocksDbStateStore`: durable storage (`rocksdb` feature)

pub mod memory_store;
#[cfg(feature = "rocksdb")]
pub mod rocksdb_store;

pub use memory_store::*;
#[cfg(feature = "rocksdb")]
pub use rocksdb_store::*;
