//! # valuesync-chart
//!
//! Line-oriented access to the `image:` section of a Helm values file.
//!
//! Handles:
//! - **Section**: a shared finite-state scanner that tracks the `image:`
//!   section and the active key block across a line-by-line pass.
//! - **Reader**: extraction of currently recorded tags, for diff reporting.
//! - **Rewriter**: in-place replacement of `repository:` and `tag:` fields,
//!   preserving every other line byte-for-byte.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod reader;
pub mod rewriter;
pub mod section;
