//! User-declared page type overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::result::PageType;

/// A user-declared mapping from a URL pattern to a verdict.
///
/// Patterns use substring or `*` wildcard semantics, never full regular
/// expressions. Marks supersede automated signals for matching URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualMark {
    /// URL or domain pattern (substring, or glob with `*`).
    pub url_pattern: String,

    /// The verdict to apply.
    pub page_type: PageType,

    /// When the mark was created or last updated.
    pub timestamp: DateTime<Utc>,
}

impl ManualMark {
    /// Create a mark stamped with the current time.
    pub fn new(url_pattern: impl Into<String>, page_type: PageType) -> Self {
        Self {
            url_pattern: url_pattern.into(),
            page_type,
            timestamp: Utc::now(),
        }
    }

    /// Set the timestamp explicitly.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
