//! Processor configuration from environment variables.
//!
//! Nothing here feeds DNA generation or addressing; those depend only on
//! the transaction.

use std::env;
use thiserror::Error;

/// Family name registered with the host runtime.
pub const FAMILY_NAME: &str = "cryptomoji";

/// Family version registered with the host runtime.
pub const FAMILY_VERSION: &str = "0.1";

/// Processor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Transaction family name.
    pub family_name: String,

    /// Transaction family version.
    pub family_version: String,

    /// Directory for the RocksDB state store.
    pub state_path: String,

    /// fsync every state batch.
    pub sync_writes: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            state_path: "./data/state".to_string(),
            sync_writes: true,
        }
    }
}

impl ProcessorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MOJI_STATE_PATH`: RocksDB directory (default: ./data/state)
    /// - `MOJI_SYNC_WRITES`: fsync each batch (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            state_path: lookup("MOJI_STATE_PATH").unwrap_or(defaults.state_path),
            sync_writes: lookup("MOJI_SYNC_WRITES")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.sync_writes),
            ..defaults
        }
    }

    /// Reject configurations the host runtime would refuse to register.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.family_name.trim().is_empty() {
            return Err(ConfigError::EmptyFamilyName);
        }
        if self.family_version.trim().is_empty() {
            return Err(ConfigError::EmptyFamilyVersion);
        }
        if self.state_path.trim().is_empty() {
            return Err(ConfigError::EmptyStatePath);
        }
        Ok(())
    }

    /// RocksDB settings derived from this configuration.
    #[cfg(feature = "rocksdb")]
    #[must_use]
    pub fn rocksdb(&self) -> crate::adapters::RocksDbConfig {
        crate::adapters::RocksDbConfig {
            path: self.state_path.clone(),
            sync_writes: self.sync_writes,
            ..Default::default()
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Family name is blank.
    #[error("family name must not be empty")]
    EmptyFamilyName,

    /// Family version is blank.
    #[error("family version must not be empty")]
    EmptyFamilyVersion,

    /// State path is blank.
    #[error("state path must not be empty")]
    EmptyStatePath,
}
