//! Shared fixtures: reproducible signers, signatures and transactions.

use moji_processor::ports::Transaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Payload for the only supported action.
pub const CREATE_COLLECTION: &[u8] = br#"{"action":"CREATE_COLLECTION"}"#;

/// Deterministic RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A compressed secp256k1-shaped public key (33 bytes, 0x02/0x03 prefix).
pub fn random_public_key(rng: &mut StdRng) -> Vec<u8> {
    let mut key = vec![0u8; 33];
    rng.fill(&mut key[1..]);
    key[0] = if rng.gen::<bool>() { 0x02 } else { 0x03 };
    key
}

/// A 64-byte compact signature.
pub fn random_signature(rng: &mut StdRng) -> Vec<u8> {
    let mut sig = vec![0u8; 64];
    rng.fill(&mut sig[..]);
    sig
}

/// A `CREATE_COLLECTION` transaction.
pub fn create_collection_txn(public_key: &[u8], signature: &[u8]) -> Transaction {
    Transaction::new(public_key.to_vec(), signature.to_vec(), CREATE_COLLECTION.to_vec())
}

/// A fresh signer with its own `CREATE_COLLECTION` transaction.
pub fn random_create_collection(rng: &mut StdRng) -> Transaction {
    let key = random_public_key(rng);
    let sig = random_signature(rng);
    create_collection_txn(&key, &sig)
}

/// Changes the first hex character of the signature and nothing else.
pub fn alter_first_hex_char(signature: &[u8]) -> Vec<u8> {
    let mut altered = signature.to_vec();
    if let Some(first) = altered.first_mut() {
        *first ^= 0x10;
    }
    altered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_reproduces() {
        let a = random_signature(&mut seeded_rng(7));
        let b = random_signature(&mut seeded_rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_alter_first_hex_char_only() {
        let sig = vec![0xAB, 0xCD];
        let altered = alter_first_hex_char(&sig);
        assert_eq!(hex::encode(&altered), "bbcd");
    }
}
