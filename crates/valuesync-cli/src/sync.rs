//! Orchestration of one synchronization run.
//!
//! Sequence: fetch both manifests (fail-fast), merge their image maps with
//! the storage overlay winning on collision, build the update plan, report
//! tag differences on stdout, then rewrite the values file. The rewrite is
//! performed even when no tag changed, so repository lines are normalized
//! and tags re-quoted on every successful run.

use valuesync_chart::reader::read_tags;
use valuesync_chart::rewriter::apply_updates;
use valuesync_common::config::SyncConfig;
use valuesync_common::error::Result;
use valuesync_compose::scanner::{merge_images, parse_images};

use crate::fetch::Fetcher;
use crate::plan::build_plan;

/// Tag shown for keys with no previously recorded value.
const MISSING_TAG: &str = "(missing)";

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The values file was rewritten; `changed` counts differing tags.
    Applied {
        /// Number of keys whose tag differed from the recorded one.
        changed: usize,
    },
    /// No mapped service was found in either manifest; nothing was written.
    EmptyPlan,
}

/// Fetches both manifests and synchronizes the values file.
///
/// # Errors
///
/// Returns an error if a fetch fails or the values file cannot be read or
/// rewritten.
pub fn run(config: &SyncConfig) -> Result<SyncOutcome> {
    let fetcher = Fetcher::new(config.timeout)?;
    let compose_text = fetcher.fetch_text(&config.compose_url)?;
    let storage_text = fetcher.fetch_text(&config.storage_url)?;
    sync_manifests(config, &compose_text, &storage_text)
}

/// Synchronizes the values file against already-fetched manifest text.
///
/// Split out from [`run`] so the full pipeline can be exercised against
/// fixture text without a network.
///
/// # Errors
///
/// Returns an error if the values file cannot be read or rewritten.
pub fn sync_manifests(
    config: &SyncConfig,
    compose_text: &str,
    storage_text: &str,
) -> Result<SyncOutcome> {
    let mut images = parse_images(compose_text);
    merge_images(&mut images, parse_images(storage_text));

    let plan = build_plan(&images);
    if plan.is_empty() {
        tracing::warn!("no mapped services found in either manifest");
        return Ok(SyncOutcome::EmptyPlan);
    }

    let current = read_tags(&config.values_path)?;
    let mut changed = 0;
    for (key, image) in &plan {
        let old_tag = current.get(key).map_or(MISSING_TAG, String::as_str);
        if old_tag != image.tag {
            println!("{key}: {old_tag} -> {}", image.tag);
            changed += 1;
        }
    }
    if changed == 0 {
        println!("No updates found.");
    }

    apply_updates(&config.values_path, &plan)?;
    Ok(SyncOutcome::Applied { changed })
}
