//! Fixed correspondence between values-file keys and compose service names.

/// One entry of the service mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMapEntry {
    /// Key of the block under `image:` in the values file.
    pub key: &'static str,
    /// Service name in the upstream compose manifests.
    pub service: &'static str,
}

/// The fixed mapping between chart image keys and compose services.
///
/// Both columns are unique; keys absent from the fetched manifests are
/// skipped by the planner rather than treated as errors.
pub const SERVICE_MAP: &[ServiceMapEntry] = &[
    ServiceMapEntry { key: "analytics", service: "analytics" },
    ServiceMapEntry { key: "auth", service: "auth" },
    ServiceMapEntry { key: "db", service: "db" },
    ServiceMapEntry { key: "functions", service: "functions" },
    ServiceMapEntry { key: "imgproxy", service: "imgproxy" },
    ServiceMapEntry { key: "kong", service: "kong" },
    ServiceMapEntry { key: "meta", service: "meta" },
    ServiceMapEntry { key: "minio", service: "minio" },
    ServiceMapEntry { key: "realtime", service: "realtime" },
    ServiceMapEntry { key: "rest", service: "rest" },
    ServiceMapEntry { key: "storage", service: "storage" },
    ServiceMapEntry { key: "studio", service: "studio" },
    ServiceMapEntry { key: "vector", service: "vector" },
];

/// Looks up the compose service name for a values-file key.
#[must_use]
pub fn service_for(key: &str) -> Option<&'static str> {
    SERVICE_MAP
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.service)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn mapping_has_thirteen_entries() {
        assert_eq!(SERVICE_MAP.len(), 13);
    }

    #[test]
    fn mapping_columns_are_unique() {
        let keys: BTreeSet<_> = SERVICE_MAP.iter().map(|e| e.key).collect();
        let services: BTreeSet<_> = SERVICE_MAP.iter().map(|e| e.service).collect();
        assert_eq!(keys.len(), SERVICE_MAP.len());
        assert_eq!(services.len(), SERVICE_MAP.len());
    }

    #[test]
    fn service_for_known_key() {
        assert_eq!(service_for("auth"), Some("auth"));
    }

    #[test]
    fn service_for_unknown_key_is_none() {
        assert_eq!(service_for("dashboard"), None);
    }
}
