//! Extraction of currently recorded image tags from a values file.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use valuesync_common::error::{Result, SyncError};

use crate::section::ImageSectionScanner;

/// `tag:` field with optional surrounding double quotes.
static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^    tag:\s*"?([^"]+)"?\s*$"#).expect("valid tag-line pattern"));

/// Reads the tag recorded for each key block under the `image:` section.
///
/// Keys whose block lacks a `tag:` line are simply absent from the result;
/// callers treat absence as "no prior recorded tag". A file without an
/// `image:` section yields an empty map.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_tags(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| SyncError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut tags = BTreeMap::new();
    let mut scanner = ImageSectionScanner::new();
    for line in content.lines() {
        let Some(key) = scanner.observe(line) else {
            continue;
        };
        if let Some(caps) = TAG_LINE.captures(line) {
            tags.insert(key.to_string(), caps[1].to_string());
        }
    }

    tracing::debug!(path = %path.display(), keys = tags.len(), "read recorded tags");
    Ok(tags)
}
