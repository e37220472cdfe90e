//! # Cryptomoji Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks
//! └── src/
//!     ├── fixtures.rs   # Seeded signers and transactions
//!     └── integration/  # Handler + store flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p moji-tests
//!
//! # With the RocksDB store
//! cargo test -p moji-tests --features rocksdb
//!
//! # Benchmarks
//! cargo bench -p moji-tests
//! ```

pub mod fixtures;
pub mod integration;
