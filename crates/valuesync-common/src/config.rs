//! Run configuration for a synchronization pass.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one synchronization run.
///
/// Defaults mirror the published constants; tests substitute fixture paths
/// and URLs instead of patching globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Path to the values file to rewrite.
    pub values_path: PathBuf,
    /// URL of the primary compose manifest.
    pub compose_url: String,
    /// URL of the storage-backend compose overlay.
    pub storage_url: String,
    /// Timeout applied to each fetch.
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            values_path: PathBuf::from(crate::constants::DEFAULT_VALUES_FILE),
            compose_url: crate::constants::DEFAULT_COMPOSE_URL.to_string(),
            storage_url: crate::constants::DEFAULT_STORAGE_URL.to_string(),
            timeout: Duration::from_secs(crate::constants::FETCH_TIMEOUT_SECS),
        }
    }
}
