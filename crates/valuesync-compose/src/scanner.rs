//! Single-pass scan of compose manifest text for service image references.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Service name at exactly two spaces of indentation.
static SERVICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^  ([A-Za-z0-9_.-]+):\s*$").expect("valid service-line pattern")
});

/// `image:` field at exactly four spaces of indentation.
static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    image:\s*(.+?)\s*$").expect("valid image-line pattern"));

/// Extracts a `service -> image reference` map from compose manifest text.
///
/// Scans lines in order, ignoring everything before the top-level
/// `services:` key. Under it, a two-space-indented identifier opens a
/// service block and a four-space-indented `image:` line records that
/// service's reference (one pair of surrounding matching quotes stripped).
/// Deeper nesting, comments, and unrecognized indentation are ignored.
#[must_use]
pub fn parse_images(text: &str) -> BTreeMap<String, String> {
    let mut images = BTreeMap::new();
    let mut in_services = false;
    let mut current_service: Option<String> = None;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        if line.trim_end() == "services:" {
            in_services = true;
            current_service = None;
            continue;
        }

        if !in_services {
            continue;
        }

        if let Some(caps) = SERVICE_LINE.captures(line) {
            current_service = Some(caps[1].to_string());
            continue;
        }

        let Some(service) = current_service.as_deref() else {
            continue;
        };

        if let Some(caps) = IMAGE_LINE.captures(line) {
            let value = strip_quotes(&caps[1]).to_string();
            images.insert(service.to_string(), value);
        }
    }

    tracing::debug!(services = images.len(), "parsed compose manifest");
    images
}

/// Merges `overlay` into `base`; overlay entries win on key collision.
pub fn merge_images(base: &mut BTreeMap<String, String>, overlay: BTreeMap<String, String>) {
    base.extend(overlay);
}

/// Strips one pair of surrounding matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
