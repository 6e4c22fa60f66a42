//! Classification verdicts and their provenance.

use serde::{Deserialize, Serialize};

/// What kind of page a URL resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// A scholarly artifact: article, thesis, chapter, and so on.
    Paper,
    /// Anything else.
    Webpage,
}

/// Which evidence source produced a verdict.
///
/// Presentation layers use this purely for labeling; the engine never
/// re-interprets it as a control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    /// URL rule table or custom domain match.
    Url,
    /// Document metadata tags.
    Meta,
    /// Embedded structured-data blocks.
    JsonLd,
    /// User-supplied override.
    Manual,
}

/// The outcome of classifying one page.
///
/// Immutable once constructed; classification passes build these fresh and
/// the cache replays them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The verdict.
    pub page_type: PageType,

    /// Confidence in the verdict, 0.0 to 1.0.
    pub confidence: f32,

    /// Evidence source that produced the verdict.
    pub source: DetectionSource,

    /// Platform label, only meaningful for URL-based matches.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub platform: Option<String>,
}

impl DetectionResult {
    /// Create a new result.
    pub fn new(page_type: PageType, source: DetectionSource, confidence: f32) -> Self {
        Self {
            page_type,
            confidence,
            source,
            platform: None,
        }
    }

    /// A "paper" verdict from the given source.
    pub fn paper(source: DetectionSource, confidence: f32) -> Self {
        Self::new(PageType::Paper, source, confidence)
    }

    /// A "webpage" verdict from the given source.
    pub fn webpage(source: DetectionSource, confidence: f32) -> Self {
        Self::new(PageType::Webpage, source, confidence)
    }

    /// Attach a platform label.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}
