//! Scholarly page classification engine.
//!
//! Decides whether a page is a "paper" (scholarly artifact) or a generic
//! "webpage" from a cascade of independent evidence sources — URL shape,
//! document metadata tags, embedded structured data, and user-declared
//! overrides — each with its own confidence model, behind a bounded,
//! time-expiring result cache.
//!
//! # Design
//!
//! - Passes abstain rather than vote: each returns `Option<DetectionResult>`
//!   and the first verdict in cascade order wins.
//! - The engine performs no I/O. Document access goes through the
//!   [`DocumentView`] capability trait; persistence of configuration and
//!   marks is the caller's concern, over serde-ready types.
//! - A detector is a plain constructible value; independent instances
//!   coexist without interference and one instance is safely shared
//!   across threads.
//!
//! # Usage
//!
//! ```rust
//! use page_detection::{PageDetector, PageType};
//!
//! # tokio_test::block_on(async {
//! let detector = PageDetector::new();
//!
//! let result = detector.detect("https://arxiv.org/abs/2301.12345", None).await;
//! assert_eq!(result.page_type, PageType::Paper);
//! assert_eq!(result.platform.as_deref(), Some("arXiv"));
//! # });
//! ```
//!
//! # Modules
//!
//! - [`detector`] - Orchestrator and configuration surface
//! - [`rules`] - URL rule table and pattern matcher
//! - [`meta`] - Metadata-tag classification pass
//! - [`structured`] - Structured-data classification pass
//! - [`marks`] - Manual override store
//! - [`cache`] - Bounded TTL result cache
//! - [`document`] - Document capability trait
//! - [`types`] - Verdicts, configuration, marks
//! - [`testing`] - Fixture document for tests and non-DOM hosts

pub mod cache;
pub mod detector;
pub mod document;
pub mod error;
pub mod marks;
pub mod meta;
pub mod rules;
pub mod structured;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use cache::ResultCache;
pub use detector::{normalize_url, PageDetector, Pass, CASCADE};
pub use document::DocumentView;
pub use error::DetectionError;
pub use marks::MarkStore;
pub use rules::{compile_wildcard, default_url_rules, UrlPattern, UrlRule};
pub use structured::SCHOLARLY_TYPE_MARKERS;
pub use types::{
    config::{DetectorConfig, MetaTagPolicy},
    mark::ManualMark,
    result::{DetectionResult, DetectionSource, PageType},
};
