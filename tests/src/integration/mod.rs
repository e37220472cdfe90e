//! # Integration Tests
//!
//! Handler and store exercised together through the public API.
//!
//! - `end_to_end`: full creation flow and record contents
//! - `determinism`: replay and seed sensitivity
//! - `uniqueness`: address distinctness across many signers
//! - `atomicity`: failures never leave partial state

pub mod end_to_end;
pub mod uniqueness;
