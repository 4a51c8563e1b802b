//! Shared scanner state for the `image:` section of a values file.
//!
//! The reader and the rewriter walk the same two-state machine; keeping it
//! in one place means the section and key tracking cannot drift between
//! them. Callers feed lines in order and act only on the lines the scanner
//! attributes to an active key block.

use std::sync::LazyLock;

use regex::Regex;

/// Top-level `image:` line opening the section.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image:\s*$").expect("valid section-header pattern"));

/// Key block at exactly two spaces of indentation.
static KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^  ([A-Za-z0-9_.-]+):\s*$").expect("valid key-line pattern"));

/// Non-blank line at zero indentation, ending the section.
static TOP_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s].*").expect("valid top-level pattern"));

/// Tracks position within the `image:` section across a line-by-line scan.
///
/// Lines may carry their trailing newline or not; the patterns tolerate
/// both, so the reader can scan trimmed lines while the rewriter scans the
/// newline-inclusive sequence it writes back.
#[derive(Debug, Default)]
pub struct ImageSectionScanner {
    in_image: bool,
    current_key: Option<String>,
}

impl ImageSectionScanner {
    /// Creates a scanner positioned before the section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next line and classifies it.
    ///
    /// Returns the active key when `line` sits inside a key block of the
    /// `image:` section and is itself neither the section header, a key
    /// line, nor the top-level line that closes the section. Those
    /// structural lines, and anything outside the section, return `None`.
    pub fn observe(&mut self, line: &str) -> Option<&str> {
        if SECTION_HEADER.is_match(line) {
            self.in_image = true;
            self.current_key = None;
            return None;
        }

        if !self.in_image {
            return None;
        }

        // The section ends at the next top-level key.
        if TOP_LEVEL.is_match(line) && !line.starts_with("image:") {
            self.in_image = false;
            self.current_key = None;
            return None;
        }

        if let Some(caps) = KEY_LINE.captures(line) {
            self.current_key = Some(caps[1].to_string());
            return None;
        }

        self.current_key.as_deref()
    }
}
