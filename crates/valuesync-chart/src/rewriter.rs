//! In-place rewrite of `repository:` and `tag:` fields in a values file.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use valuesync_common::error::{Result, SyncError};
use valuesync_common::types::ImageRef;

use crate::section::ImageSectionScanner;

static REPOSITORY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    repository:\s*").expect("valid repository-line pattern"));

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    tag:\s*").expect("valid tag-line pattern"));

/// Replaces `repository:` and `tag:` values for every key present in
/// `updates`, leaving all other lines byte-for-byte untouched.
///
/// The whole file is read, the in-memory line sequence mutated, and the
/// full sequence written back; replaced lines are newline-terminated and
/// tags are always re-quoted with double quotes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn apply_updates(path: &Path, updates: &BTreeMap<String, ImageRef>) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|e| SyncError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    // split_inclusive keeps each line's original terminator, so untouched
    // lines (CRLF included) and a missing final newline survive the
    // round-trip exactly.
    let mut lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();

    let mut scanner = ImageSectionScanner::new();
    for line in &mut lines {
        let Some(key) = scanner.observe(line.as_str()) else {
            continue;
        };
        let Some(image) = updates.get(key) else {
            continue;
        };
        if REPOSITORY_LINE.is_match(line) {
            *line = format!("    repository: {}\n", image.repository);
        } else if TAG_LINE.is_match(line) {
            *line = format!("    tag: \"{}\"\n", image.tag);
        }
    }

    tracing::info!(path = %path.display(), keys = updates.len(), "rewrote values file");
    std::fs::write(path, lines.concat()).map_err(|e| SyncError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create tempfile");
        file.write_all(content.as_bytes()).expect("failed to write fixture");
        file
    }

    fn updates_for(key: &str, repository: &str, tag: &str) -> BTreeMap<String, ImageRef> {
        let mut updates = BTreeMap::new();
        updates.insert(
            key.to_string(),
            ImageRef {
                repository: repository.to_string(),
                tag: tag.to_string(),
            },
        );
        updates
    }

    #[test]
    fn replaces_repository_and_tag_for_updated_key() {
        let file = write_fixture(
            "image:\n  auth:\n    repository: old/repo\n    tag: \"v1\"\n",
        );
        apply_updates(file.path(), &updates_for("auth", "new/repo", "v2")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert_eq!(
            content,
            "image:\n  auth:\n    repository: new/repo\n    tag: \"v2\"\n"
        );
    }

    #[test]
    fn untouched_lines_survive_byte_for_byte() {
        let original = "# chart values\nreplicas: 3\nimage:\n  auth:\n    repository: old/repo\n    tag: \"v1\"\n    pullPolicy: IfNotPresent\n  db:\n    repository: supabase/postgres\n    tag: \"15.1\"\nresources:\n  limits:\n    cpu: 100m\n";
        let file = write_fixture(original);
        apply_updates(file.path(), &updates_for("auth", "new/repo", "v2")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert_eq!(
            content,
            "# chart values\nreplicas: 3\nimage:\n  auth:\n    repository: new/repo\n    tag: \"v2\"\n    pullPolicy: IfNotPresent\n  db:\n    repository: supabase/postgres\n    tag: \"15.1\"\nresources:\n  limits:\n    cpu: 100m\n"
        );
    }

    #[test]
    fn unquoted_tag_is_requoted() {
        let file = write_fixture("image:\n  db:\n    repository: supabase/postgres\n    tag: 15.1\n");
        apply_updates(file.path(), &updates_for("db", "supabase/postgres", "15.6"))
            .expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert!(content.contains("    tag: \"15.6\"\n"));
    }

    #[test]
    fn keys_not_in_updates_are_left_alone() {
        let original = "image:\n  auth:\n    repository: a/b\n    tag: \"v1\"\n  db:\n    repository: c/d\n    tag: \"v2\"\n";
        let file = write_fixture(original);
        apply_updates(file.path(), &updates_for("auth", "a/b", "v1")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert!(content.contains("    repository: c/d\n    tag: \"v2\"\n"));
    }

    #[test]
    fn fields_after_the_section_ends_are_left_alone() {
        let original = "image:\n  auth:\n    tag: \"v1\"\nsidecar:\n  auth:\n    repository: keep/me\n    tag: \"v9\"\n";
        let file = write_fixture(original);
        apply_updates(file.path(), &updates_for("auth", "new/repo", "v2")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert!(content.ends_with("sidecar:\n  auth:\n    repository: keep/me\n    tag: \"v9\"\n"));
    }

    #[test]
    fn replaced_final_line_without_newline_gains_one() {
        let file = write_fixture("image:\n  auth:\n    tag: \"v1\"");
        apply_updates(file.path(), &updates_for("auth", "a/b", "v2")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert_eq!(content, "image:\n  auth:\n    tag: \"v2\"\n");
    }

    #[test]
    fn untouched_file_without_trailing_newline_is_preserved() {
        let file = write_fixture("image:\n  other:\n    tag: \"v1\"");
        apply_updates(file.path(), &updates_for("auth", "a/b", "v2")).expect("rewrite failed");
        let content = std::fs::read_to_string(file.path()).expect("read failed");
        assert_eq!(content, "image:\n  other:\n    tag: \"v1\"");
    }
}
