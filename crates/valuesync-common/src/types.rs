//! Domain primitive types used across the valuesync workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A container image reference split into repository and tag.
///
/// The `tag` field holds either a tag (`v2.1.0`) or a content digest
/// (`sha256:abc...`); references with neither default to `latest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Repository part, including any registry host and port.
    pub repository: String,
    /// Tag or digest part.
    pub tag: String,
}

impl ImageRef {
    /// Splits a raw image reference into repository and tag-or-digest.
    ///
    /// Rules, in priority order:
    /// 1. `repo@digest` — split on the first `@`; the digest keeps any
    ///    colons it contains.
    /// 2. `repo:tag` — split on the last `:`. If the candidate tag contains
    ///    a `/`, the colon was a registry `host:port` separator and the
    ///    whole string is the repository, tag defaulting to `latest`.
    /// 3. Anything else is a bare repository with tag `latest`.
    #[must_use]
    pub fn parse(image: &str) -> Self {
        if let Some((repository, digest)) = image.split_once('@') {
            return Self {
                repository: repository.to_string(),
                tag: digest.to_string(),
            };
        }
        if let Some((repository, tag)) = image.rsplit_once(':') {
            if tag.contains('/') {
                // registry port, not a tag
                return Self {
                    repository: image.to_string(),
                    tag: crate::constants::DEFAULT_TAG.to_string(),
                };
            }
            return Self {
                repository: repository.to_string(),
                tag: tag.to_string(),
            };
        }
        Self {
            repository: image.to_string(),
            tag: crate::constants::DEFAULT_TAG.to_string(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tags cannot contain ':'; digests always do.
        if self.tag.contains(':') {
            write!(f, "{}@{}", self.repository, self.tag)
        } else {
            write!(f, "{}:{}", self.repository, self.tag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_repo_and_tag() {
        let image = ImageRef::parse("supabase/gotrue:v2.1.0");
        assert_eq!(image.repository, "supabase/gotrue");
        assert_eq!(image.tag, "v2.1.0");
    }

    #[test]
    fn parse_digest_keeps_inner_colons() {
        let image = ImageRef::parse("supabase/storage-api@sha256:deadbeef");
        assert_eq!(image.repository, "supabase/storage-api");
        assert_eq!(image.tag, "sha256:deadbeef");
    }

    #[test]
    fn parse_registry_port_without_tag_defaults_to_latest() {
        let image = ImageRef::parse("registry.local:5000/tools/vector");
        assert_eq!(image.repository, "registry.local:5000/tools/vector");
        assert_eq!(image.tag, "latest");
    }

    #[test]
    fn parse_registry_port_with_tag_splits_on_last_colon() {
        let image = ImageRef::parse("registry.local:5000/tools/vector:0.28.1");
        assert_eq!(image.repository, "registry.local:5000/tools/vector");
        assert_eq!(image.tag, "0.28.1");
    }

    #[test]
    fn parse_bare_repository_defaults_to_latest() {
        let image = ImageRef::parse("postgres");
        assert_eq!(image.repository, "postgres");
        assert_eq!(image.tag, "latest");
    }

    #[test]
    fn display_joins_tag_with_colon() {
        let image = ImageRef::parse("supabase/gotrue:v2.1.0");
        assert_eq!(image.to_string(), "supabase/gotrue:v2.1.0");
    }

    #[test]
    fn display_joins_digest_with_at() {
        let image = ImageRef::parse("supabase/gotrue@sha256:deadbeef");
        assert_eq!(image.to_string(), "supabase/gotrue@sha256:deadbeef");
    }
}
