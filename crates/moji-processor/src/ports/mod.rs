//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `TransactionHandler`, transaction types
//! - **Driven Ports (Outbound)**: `StateStore`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
