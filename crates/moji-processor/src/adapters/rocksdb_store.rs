//! # RocksDB State Store
//!
//! Production `StateStore` backed by RocksDB.
//!
//! ## Features
//!
//! - Atomic batch writes (`WriteBatch`)
//! - Dedicated `state` column family
//! - Snappy compression
//! - Bloom filters for point lookups
//! - Optional fsync per batch

use crate::domain::value_objects::Address;
use crate::ports::outbound::{StateBatch, StateStore, StoreError};
use parking_lot::RwLock;
use rocksdb::{ColumnFamilyDescriptor, Options, WriteBatch, DB};
use std::sync::Arc;

/// Column family holding ledger state.
pub const CF_STATE: &str = "state";

/// RocksDB configuration.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: String,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 32MB)
    pub write_buffer_size: usize,
    /// Enable fsync after each batch (default: true for durability)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: "./data/state".to_string(),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 32 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
            write_buffer_size: 4 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed state store.
pub struct RocksDbStateStore {
    db: Arc<RwLock<DB>>,
    config: RocksDbConfig,
}

impl RocksDbStateStore {
    /// Open or create the database.
    pub fn open(config: RocksDbConfig) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let mut cf_opts = Options::default();
        cf_opts.set_compression_type(rocksdb::DBCompressionType::Snappy);
        let cf = ColumnFamilyDescriptor::new(CF_STATE, cf_opts);

        let db = DB::open_cf_descriptors(&opts, &config.path, vec![cf])
            .map_err(|e| StoreError::Unavailable(format!("failed to open RocksDB: {e}")))?;

        tracing::info!(path = %config.path, "opened RocksDB state store");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            config,
        })
    }
}

impl StateStore for RocksDbStateStore {
    fn get(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError> {
        let db = self.db.read();
        let cf = db
            .cf_handle(CF_STATE)
            .ok_or_else(|| StoreError::Unavailable("missing state column family".to_string()))?;
        db.get_cf(&cf, address.as_str().as_bytes())
            .map_err(|e| StoreError::Unavailable(format!("RocksDB get failed: {e}")))
    }

    fn set_batch(&self, batch: StateBatch) -> Result<(), StoreError> {
        let db = self.db.write();
        let cf = db
            .cf_handle(CF_STATE)
            .ok_or_else(|| StoreError::Unavailable("missing state column family".to_string()))?;

        let mut write_batch = WriteBatch::default();
        for (address, data) in batch {
            write_batch.put_cf(&cf, address.as_str().as_bytes(), data);
        }

        let mut write_opts = rocksdb::WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);

        db.write_opt(write_batch, &write_opts)
            .map_err(|e| StoreError::BatchRejected(format!("RocksDB batch write failed: {e}")))
    }
}
