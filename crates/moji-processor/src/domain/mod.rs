//! # Domain Layer (Inner Hexagon)
//!
//! Pure logic for the cryptomoji family: addressing, DNA generation and
//! record construction. NO I/O, NO store access.

pub mod addressing;
pub mod entities;
pub mod factory;
pub mod generator;
pub mod invariants;
pub mod value_objects;

pub use addressing::*;
pub use entities::*;
pub use factory::*;
pub use generator::*;
pub use invariants::*;
pub use value_objects::*;
