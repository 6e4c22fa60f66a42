//! Metadata-tag classification pass.
//!
//! Scholarly pages commonly carry `citation_*` metadata for indexers.
//! This pass checks a required/optional tag policy against the document:
//! it either confirms "paper" or abstains — it never concludes "webpage".

use tracing::{debug, trace};

use crate::document::DocumentView;
use crate::types::config::MetaTagPolicy;
use crate::types::result::{DetectionResult, DetectionSource};

/// Classify a document by its metadata tags.
///
/// Abstains unless every required tag has a non-empty value and at least
/// `min_optional_count` optional tags do too. Confidence grows linearly
/// with the share of optional tags present, from 0.70 up to a 0.95 cap.
pub fn classify_meta(
    document: &dyn DocumentView,
    policy: &MetaTagPolicy,
) -> Option<DetectionResult> {
    for tag in &policy.required_tags {
        if !has_content(document, tag) {
            trace!(%tag, "required metadata tag missing");
            return None;
        }
    }

    let optional_count = policy
        .optional_tags
        .iter()
        .filter(|tag| has_content(document, tag))
        .count();

    if optional_count < policy.min_optional_count {
        trace!(
            optional_count,
            min = policy.min_optional_count,
            "too few optional metadata tags"
        );
        return None;
    }

    let fraction = if policy.optional_tags.is_empty() {
        0.0
    } else {
        optional_count as f32 / policy.optional_tags.len() as f32
    };
    let confidence = (0.70 + fraction * 0.25).min(0.95);

    debug!(optional_count, confidence, "metadata tags confirm paper");
    Some(DetectionResult::paper(DetectionSource::Meta, confidence))
}

// An empty content value counts as absent.
fn has_content(document: &dyn DocumentView, tag: &str) -> bool {
    document
        .meta_content(tag)
        .is_some_and(|value| !value.is_empty())
}
