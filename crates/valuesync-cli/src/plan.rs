//! Update planning: joining the service mapping against fetched images.

use std::collections::BTreeMap;

use valuesync_common::mapping::SERVICE_MAP;
use valuesync_common::types::ImageRef;

/// The computed set of image values to write, keyed by values-file key.
pub type UpdatePlan = BTreeMap<String, ImageRef>;

/// Builds the update plan from a merged compose image map.
///
/// Mapped services absent from the manifests, or present with an empty
/// image string, are skipped silently; an optional service missing from a
/// given manifest source is expected, not an error.
#[must_use]
pub fn build_plan(images: &BTreeMap<String, String>) -> UpdatePlan {
    let mut plan = UpdatePlan::new();
    for entry in SERVICE_MAP {
        let Some(image) = images.get(entry.service) else {
            continue;
        };
        if image.is_empty() {
            continue;
        }
        plan.insert(entry.key.to_string(), ImageRef::parse(image));
    }
    plan
}
