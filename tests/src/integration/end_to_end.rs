//! # End-to-End Collection Creation
//!
//! A signer submits `CREATE_COLLECTION` and the store ends up holding one
//! collection and three moji, all decodable and mutually consistent.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use moji_processor::codec::Record;
    use moji_processor::domain::{
        collection_address, moji_prefix, AddressKind, Collection, Moji, PublicKey,
        ADDRESS_LENGTH, DNA_HEX_LENGTH, FAMILY_NAMESPACE,
    };
    use moji_processor::prelude::*;
    use moji_telemetry::{init_logging, TelemetryConfig};

    fn handler() -> MojiHandler {
        let _ = init_logging(&TelemetryConfig {
            console_output: false,
            ..Default::default()
        });
        MojiHandler::new()
    }

    fn created(outcome: ApplyOutcome) -> CollectionCreated {
        match outcome {
            ApplyOutcome::CollectionCreated(created) => created,
        }
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_creates_collection_with_three_moji() {
        let handler = handler();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(1);
        let key = random_public_key(&mut rng);
        let txn = create_collection_txn(&key, &random_signature(&mut rng));

        let created = created(handler.apply(&txn, &store).unwrap());

        let owner = PublicKey::new(key.clone()).unwrap();
        assert_eq!(created.collection, collection_address(&owner));
        assert_eq!(store.len().unwrap(), 4);

        let raw = store.get(&created.collection).unwrap().unwrap();
        let collection = Collection::decode(&raw).unwrap();
        assert_eq!(collection.key, owner);
        assert_eq!(collection.moji, created.moji);
        assert_eq!(collection.moji.len(), 3);
    }

    #[test]
    fn test_moji_records_are_fresh_and_owned() {
        let handler = handler();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(2);
        let key = random_public_key(&mut rng);
        let txn = create_collection_txn(&key, &random_signature(&mut rng));
        let owner = PublicKey::new(key).unwrap();

        let created = created(handler.apply(&txn, &store).unwrap());

        for address in &created.moji {
            assert_eq!(address.as_str().len(), ADDRESS_LENGTH);
            assert!(address.as_str().starts_with(FAMILY_NAMESPACE));
            assert!(address.as_str().starts_with(&moji_prefix(&owner)));
            assert_eq!(address.kind(), AddressKind::Moji);

            let moji = Moji::decode(&store.get(address).unwrap().unwrap()).unwrap();
            assert_eq!(moji.owner, owner);
            assert_eq!(moji.dna.to_hex().len(), DNA_HEX_LENGTH);
            assert!(moji.sire.is_none());
            assert!(moji.breeder.is_none());
            assert!(moji.sired.is_empty());
            assert!(moji.bred.is_empty());
            assert_eq!(moji.address(), *address);
        }
    }

    #[test]
    fn test_scan_by_owner_prefix_finds_all_moji() {
        let handler = handler();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(3);
        let key = random_public_key(&mut rng);
        let txn = create_collection_txn(&key, &random_signature(&mut rng));

        let created = created(handler.apply(&txn, &store).unwrap());

        let prefix = moji_prefix(&PublicKey::new(key).unwrap());
        let found: Vec<_> = store
            .scan_prefix(&prefix)
            .unwrap()
            .into_iter()
            .map(|(address, _)| address)
            .collect();
        let mut expected = created.moji.clone();
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_handler_usable_as_trait_object() {
        let handler: Box<dyn TransactionHandler> = Box::new(handler());
        let store = InMemoryStateStore::new();
        let txn = random_create_collection(&mut seeded_rng(4));

        assert_eq!(handler.family_name(), "cryptomoji");
        assert!(handler.apply(&txn, &store).is_ok());
    }

    // =============================================================================
    // DUPLICATE IDENTITY
    // =============================================================================

    #[test]
    fn test_second_collection_rejected_and_store_untouched() {
        let handler = handler();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(5);
        let key = random_public_key(&mut rng);

        handler
            .apply(&create_collection_txn(&key, &random_signature(&mut rng)), &store)
            .unwrap();
        let before = store.snapshot().unwrap();

        // New signature, same identity
        let retry = create_collection_txn(&key, &random_signature(&mut rng));
        let err = handler.apply(&retry, &store).unwrap_err();

        assert!(matches!(err, MojiError::DuplicateIdentity { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidTransaction);
        assert!(err.to_string().contains(&hex::encode(&key)));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_distinct_signers_get_independent_collections() {
        let handler = handler();
        let store = InMemoryStateStore::new();
        let mut rng = seeded_rng(6);

        let first = created(
            handler
                .apply(&random_create_collection(&mut rng), &store)
                .unwrap(),
        );
        let second = created(
            handler
                .apply(&random_create_collection(&mut rng), &store)
                .unwrap(),
        );

        assert_ne!(first.collection, second.collection);
        assert_eq!(store.len().unwrap(), 8);
    }

    // =============================================================================
    // ROCKSDB
    // =============================================================================

    #[cfg(feature = "rocksdb")]
    #[test]
    fn test_rocksdb_store_end_to_end() {
        use moji_processor::adapters::RocksDbStateStore;
        use moji_processor::config::ProcessorConfig;

        let dir = tempfile::tempdir().unwrap();
        let config = ProcessorConfig {
            state_path: dir.path().to_string_lossy().to_string(),
            sync_writes: false,
            ..Default::default()
        };
        let handler = MojiHandler::with_config(config.clone()).unwrap();
        let mut rng = seeded_rng(7);
        let key = random_public_key(&mut rng);
        let txn = create_collection_txn(&key, &random_signature(&mut rng));

        let created = {
            let store = RocksDbStateStore::open(config.rocksdb()).unwrap();
            created(handler.apply(&txn, &store).unwrap())
        };

        let store = RocksDbStateStore::open(config.rocksdb()).unwrap();
        let collection =
            Collection::decode(&store.get(&created.collection).unwrap().unwrap()).unwrap();
        assert_eq!(collection.moji, created.moji);

        let retry = create_collection_txn(&key, &random_signature(&mut rng));
        assert!(matches!(
            handler.apply(&retry, &store),
            Err(MojiError::DuplicateIdentity { .. })
        ));
    }
}
