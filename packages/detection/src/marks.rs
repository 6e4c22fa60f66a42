//! Manual override store.
//!
//! User-declared URL-pattern verdicts, consulted after the automated
//! passes and before the default fallback. Mark patterns use the
//! substring/wildcard semantics of [`UrlPattern::literal`] — a user
//! string is never interpreted as a regular expression.

use tracing::debug;

use crate::rules::UrlPattern;
use crate::types::mark::ManualMark;
use crate::types::result::{DetectionResult, DetectionSource, PageType};

/// Ordered list of manual marks with last-write-wins updates by pattern.
#[derive(Debug, Clone, Default)]
pub struct MarkStore {
    marks: Vec<ManualMark>,
}

impl MarkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first mark matching a URL.
    ///
    /// Marks are scanned in insertion order; a hit carries the mark's
    /// verdict at full confidence.
    pub fn lookup(&self, url: &str) -> Option<DetectionResult> {
        for mark in &self.marks {
            if UrlPattern::literal(mark.url_pattern.clone()).matches(url) {
                debug!(pattern = %mark.url_pattern, "manual mark matched");
                return Some(DetectionResult::new(
                    mark.page_type,
                    DetectionSource::Manual,
                    1.0,
                ));
            }
        }
        None
    }

    /// Add a mark, replacing any existing entry with the same pattern.
    pub fn add(&mut self, pattern: impl Into<String>, page_type: PageType) {
        let pattern = pattern.into();
        self.marks.retain(|mark| mark.url_pattern != pattern);
        self.marks.push(ManualMark::new(pattern, page_type));
    }

    /// Remove the mark with the given pattern, if present.
    pub fn remove(&mut self, pattern: &str) {
        self.marks.retain(|mark| mark.url_pattern != pattern);
    }

    /// All marks, as owned copies.
    pub fn list(&self) -> Vec<ManualMark> {
        self.marks.clone()
    }

    /// Replace the whole list, e.g. when loading persisted marks.
    pub fn replace_all(&mut self, marks: Vec<ManualMark>) {
        self.marks = marks;
    }

    /// Number of stored marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
