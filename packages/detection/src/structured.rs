//! Structured-data classification pass.
//!
//! Scans embedded Schema.org-style blocks for scholarly type markers. A
//! block's raw text is parsed as generic JSON; a block that fails to
//! parse is skipped through an explicit `Err` arm and never surfaced to
//! the caller. The first structurally valid match wins — no attempt is
//! made to reconcile conflicting types across blocks.

use serde_json::Value;
use tracing::{debug, trace};

use crate::document::DocumentView;
use crate::error::Result;
use crate::types::result::{DetectionResult, DetectionSource};

/// Declared-type markers that identify scholarly content, matched by
/// case-insensitive containment.
pub const SCHOLARLY_TYPE_MARKERS: [&str; 6] = [
    "ScholarlyArticle",
    "Article",
    "Thesis",
    "Chapter",
    "PublicationIssue",
    "PublicationVolume",
];

/// Classify a document by its structured-data blocks.
///
/// Returns a 0.80-confidence "paper" verdict on the first object — top
/// level, array element, or `@graph` member — whose declared `@type`
/// contains a scholarly marker. Abstains when nothing matches.
pub fn classify_structured(document: &dyn DocumentView) -> Option<DetectionResult> {
    for block in document.structured_data_blocks() {
        let value = match parse_block(&block) {
            Ok(value) => value,
            // Malformed blocks are skipped, never surfaced.
            Err(err) => {
                trace!(%err, "skipping malformed structured data block");
                continue;
            }
        };

        if scan_value(&value) {
            debug!("structured data declares a scholarly type");
            return Some(DetectionResult::paper(DetectionSource::JsonLd, 0.80));
        }
    }

    None
}

/// Parse one raw block as generic JSON.
pub fn parse_block(raw: &str) -> Result<Value> {
    Ok(serde_json::from_str(raw)?)
}

// A block may be a single object or a collection of objects.
fn scan_value(value: &Value) -> bool {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };
    items.iter().any(scan_item)
}

// Checks the item itself, then its `@graph` members one level deep.
fn scan_item(item: &Value) -> bool {
    if declares_scholarly_type(item) {
        return true;
    }
    item.get("@graph")
        .and_then(Value::as_array)
        .is_some_and(|graph| graph.iter().any(declares_scholarly_type))
}

// Only string-valued `@type` declarations are considered.
fn declares_scholarly_type(item: &Value) -> bool {
    item.get("@type")
        .and_then(Value::as_str)
        .is_some_and(is_scholarly_type)
}

/// Whether a declared type string names scholarly content.
pub fn is_scholarly_type(declared: &str) -> bool {
    let declared = declared.to_lowercase();
    SCHOLARLY_TYPE_MARKERS
        .iter()
        .any(|marker| declared.contains(&marker.to_lowercase()))
}
