//! Testing utilities including a fixture document.
//!
//! Useful for testing applications that use the detection library without
//! a real browser document behind the [`DocumentView`] seam.

use std::collections::HashMap;

use crate::document::DocumentView;

/// A fixed, in-memory [`DocumentView`].
///
/// Holds a metadata name/content map and an ordered list of raw
/// structured-data blocks. Built up with `with_*` methods:
///
/// ```rust
/// use page_detection::testing::StaticDocument;
///
/// let document = StaticDocument::new()
///     .with_meta("citation_title", "A Great Paper")
///     .with_structured_data(r#"{"@type": "ScholarlyArticle"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    meta: HashMap<String, String>,
    blocks: Vec<String>,
}

impl StaticDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metadata element's content.
    pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.meta.insert(name.into(), content.into());
        self
    }

    /// Append a raw structured-data block.
    ///
    /// The text is stored verbatim; malformed JSON is a legitimate
    /// fixture for exercising the skip path.
    pub fn with_structured_data(mut self, raw: impl Into<String>) -> Self {
        self.blocks.push(raw.into());
        self
    }
}

impl DocumentView for StaticDocument {
    fn meta_content(&self, name: &str) -> Option<String> {
        self.meta.get(name).cloned()
    }

    fn structured_data_blocks(&self) -> Vec<String> {
        self.blocks.clone()
    }
}
