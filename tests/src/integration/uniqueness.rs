//! # Address Uniqueness
//!
//! Many signers sharing one store never produce overlapping addresses.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use moji_processor::domain::{AddressKind, FAMILY_NAMESPACE};
    use moji_processor::prelude::*;
    use std::collections::HashSet;

    const SIGNERS: usize = 250;

    #[test]
    fn test_many_signers_produce_distinct_addresses() {
        let handler = MojiHandler::new();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(20);
        let mut seen = HashSet::new();

        for _ in 0..SIGNERS {
            let txn = random_create_collection(&mut rng);
            let ApplyOutcome::CollectionCreated(created) = handler.apply(&txn, &store).unwrap();

            assert!(seen.insert(created.collection.clone()));
            for address in created.moji {
                assert!(seen.insert(address), "address reused across signers");
            }
        }

        assert_eq!(store.len().unwrap(), SIGNERS * 4);
        assert!(seen.iter().all(|a| a.as_str().starts_with(FAMILY_NAMESPACE)));
    }

    #[test]
    fn test_kinds_never_overlap() {
        let handler = MojiHandler::new();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(21);

        for _ in 0..25 {
            handler
                .apply(&random_create_collection(&mut rng), &store)
                .unwrap();
        }

        let collections = store
            .scan_prefix(&format!("{FAMILY_NAMESPACE}{}", AddressKind::Collection.prefix()))
            .unwrap();
        let moji = store
            .scan_prefix(&format!("{FAMILY_NAMESPACE}{}", AddressKind::Moji.prefix()))
            .unwrap();
        assert_eq!(collections.len(), 25);
        assert_eq!(moji.len(), 75);
    }

    #[test]
    fn test_same_signature_different_signers_diverge() {
        let mut rng = seeded_rng(22);
        let signature = random_signature(&mut rng);
        let handler = MojiHandler::new();
        let store = InMemoryStateStore::new();

        let a = create_collection_txn(&random_public_key(&mut rng), &signature);
        let b = create_collection_txn(&random_public_key(&mut rng), &signature);

        let ApplyOutcome::CollectionCreated(a) = handler.apply(&a, &store).unwrap();
        let ApplyOutcome::CollectionCreated(b) = handler.apply(&b, &store).unwrap();

        // Same DNA, distinct owners: addresses still disjoint
        assert_eq!(a.dna, b.dna);
        assert!(a.moji.iter().all(|addr| !b.moji.contains(addr)));
    }
}
