//! System-wide constants and default endpoints.

/// Default URL of the primary docker-compose manifest.
pub const DEFAULT_COMPOSE_URL: &str =
    "https://raw.githubusercontent.com/supabase/supabase/master/docker/docker-compose.yml";

/// Default URL of the S3 storage-backend compose overlay.
pub const DEFAULT_STORAGE_URL: &str =
    "https://raw.githubusercontent.com/supabase/supabase/master/docker/docker-compose.s3.yml";

/// Default path of the values file, relative to the working directory.
pub const DEFAULT_VALUES_FILE: &str = "values.yaml";

/// Timeout applied to each manifest fetch, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Tag assumed for image references that carry neither a tag nor a digest.
pub const DEFAULT_TAG: &str = "latest";

/// Application name used in CLI output.
pub const APP_NAME: &str = "valuesync";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "vsync";
