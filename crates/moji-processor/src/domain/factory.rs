//! # Moji Factory
//!
//! Turns one generator draw into one moji and its address.
//! No I/O; the handler decides what to do with the result.

use crate::domain::addressing::moji_address;
use crate::domain::entities::Moji;
use crate::domain::generator::SeededGenerator;
use crate::domain::value_objects::{Address, Dna, PublicKey};

/// A minted moji paired with the address it will be stored at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintedMoji {
    /// Storage address.
    pub address: Address,
    /// The record.
    pub moji: Moji,
}

/// Mints one moji for `owner` from the next draw of `generator`.
///
/// Returns the moji and the advanced generator.
#[must_use]
pub fn make_moji(owner: &PublicKey, generator: SeededGenerator) -> (MintedMoji, SeededGenerator) {
    let (draw, generator) = generator.next();
    let dna = Dna::new(draw);
    let minted = MintedMoji {
        address: moji_address(owner, &dna),
        moji: Moji::new(dna, owner.clone()),
    };
    (minted, generator)
}

/// Mints `count` moji in order, threading the generator through each draw.
#[must_use]
pub fn make_moji_batch(
    owner: &PublicKey,
    mut generator: SeededGenerator,
    count: usize,
) -> (Vec<MintedMoji>, SeededGenerator) {
    let mut minted = Vec::with_capacity(count);
    for _ in 0..count {
        let (moji, next) = make_moji(owner, generator);
        minted.push(moji);
        generator = next;
    }
    (minted, generator)
}
