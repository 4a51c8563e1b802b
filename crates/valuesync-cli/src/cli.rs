//! CLI argument definitions.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use valuesync_common::config::SyncConfig;
use valuesync_common::constants;

/// valuesync — Sync values-file image tags with upstream compose manifests.
#[derive(Parser, Debug)]
#[command(name = constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Path to the values file to rewrite.
    #[arg(long, default_value = constants::DEFAULT_VALUES_FILE)]
    pub file: PathBuf,

    /// URL of the primary compose manifest.
    #[arg(long, default_value = constants::DEFAULT_COMPOSE_URL)]
    pub compose_url: String,

    /// URL of the storage-backend compose overlay.
    #[arg(long, default_value = constants::DEFAULT_STORAGE_URL)]
    pub storage_url: String,

    /// Per-request fetch timeout in seconds.
    #[arg(long, default_value_t = constants::FETCH_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Converts parsed arguments into a run configuration.
    #[must_use]
    pub fn into_config(self) -> SyncConfig {
        SyncConfig {
            values_path: self.file,
            compose_url: self.compose_url,
            storage_url: self.storage_url,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_constants() {
        let cli = Cli::parse_from(["vsync"]);
        let config = cli.into_config();
        assert_eq!(config.values_path, PathBuf::from("values.yaml"));
        assert_eq!(config.compose_url, constants::DEFAULT_COMPOSE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_honored() {
        let cli = Cli::parse_from([
            "vsync",
            "--file",
            "charts/stack/values.yaml",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.into_config();
        assert_eq!(config.values_path, PathBuf::from("charts/stack/values.yaml"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
