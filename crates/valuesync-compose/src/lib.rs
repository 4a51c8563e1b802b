//! # valuesync-compose
//!
//! Extraction of `service -> image` mappings from docker-compose manifests.
//!
//! This is deliberately not a YAML parser: compose files published upstream
//! use a constrained two-level block style, and a single linear scan over
//! lines with exact indentation is enough to read image references out of
//! them without pulling in a document model.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod scanner;
