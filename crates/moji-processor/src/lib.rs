//! # moji-processor
//!
//! Transaction processor for the cryptomoji family.
//!
//! ## Role in System
//!
//! - **Collection Creation**: `CREATE_COLLECTION` registers a signer and
//!   mints three moji for them
//! - **Deterministic**: DNA is drawn from a generator seeded only by the
//!   transaction signature, so every validator computes identical state
//! - **Atomic**: a collection and its moji land in one write batch or not
//!   at all
//!
//! ## Address Layout
//!
//! ```text
//! ┌──────────────┬──────┬───────────────────────────────────────────────┐
//! │ namespace(6) │ kind │ body (62)                                     │
//! ├──────────────┼──────┼───────────────────────────────────────────────┤
//! │ 5f4d76       │ 00   │ sha512(public key)[..62]                      │
//! │ 5f4d76       │ 01   │ sha512(public key)[..8] ++ sha512(dna)[..54]  │
//! └──────────────┴──────┴───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use moji_processor::prelude::*;
//!
//! let handler = MojiHandler::new();
//! let store = InMemoryStateStore::new();
//! let txn = Transaction::new(
//!     vec![2u8; 33],
//!     vec![7u8; 64],
//!     br#"{"action":"CREATE_COLLECTION"}"#.to_vec(),
//! );
//!
//! let ApplyOutcome::CollectionCreated(created) = handler.apply(&txn, &store).unwrap();
//! assert_eq!(created.moji.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod adapters;
pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use codec::Record;
pub use config::*;
pub use domain::*;
pub use errors::*;
pub use ports::*;
pub use service::MojiHandler;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports.
pub mod prelude {
    pub use crate::adapters::InMemoryStateStore;
    pub use crate::domain::{Address, AddressKind, Collection, CollectionCreated, Dna, Moji, PublicKey};
    pub use crate::errors::{ErrorKind, MojiError};
    pub use crate::ports::{ApplyOutcome, StateBatch, StateStore, Transaction, TransactionHandler};
    pub use crate::service::MojiHandler;
}
