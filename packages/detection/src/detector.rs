//! Detection orchestrator.
//!
//! Composes the classification passes into a single `detect` call:
//! normalize the URL, consult the cache, fold the cascade first-match-wins,
//! fall back to a low-confidence "webpage" verdict, cache, return. Also
//! owns the live configuration surface; every mutation drops the cache so
//! no verdict computed under a superseded policy is ever replayed.

use std::sync::RwLock;
use std::time::Duration;

use tracing::{debug, trace};
use url::Url;

use crate::cache::ResultCache;
use crate::document::DocumentView;
use crate::marks::MarkStore;
use crate::meta;
use crate::rules::{self, UrlRule};
use crate::structured;
use crate::types::config::DetectorConfig;
use crate::types::mark::ManualMark;
use crate::types::result::{DetectionResult, DetectionSource, PageType};

/// One evidence source in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Built-in rule table and custom domains.
    UrlRules,
    /// Document metadata tags.
    MetaTags,
    /// Embedded structured-data blocks.
    StructuredData,
    /// User-declared overrides.
    ManualMarks,
}

/// Cascade order. The first pass to produce a verdict terminates the
/// fold; a disabled or inapplicable pass abstains.
pub const CASCADE: [Pass; 4] = [
    Pass::UrlRules,
    Pass::MetaTags,
    Pass::StructuredData,
    Pass::ManualMarks,
];

/// Page classifier owning its policy, override list, and result cache.
///
/// A detector is a plain value: construct as many independent instances
/// as needed, or share one across threads behind an `Arc` — every method
/// takes `&self` and internal state sits behind locks.
#[derive(Debug)]
pub struct PageDetector {
    config: RwLock<DetectorConfig>,
    rules: Vec<UrlRule>,
    marks: RwLock<MarkStore>,
    cache: ResultCache,
}

impl Default for PageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDetector {
    /// Create a detector with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// Create a detector with an explicit configuration.
    pub fn with_config(config: DetectorConfig) -> Self {
        let mut rules = rules::default_url_rules();
        // Stable sort: table order is the tie-breaker among equal
        // priorities.
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        Self {
            config: RwLock::new(config),
            rules,
            marks: RwLock::new(MarkStore::new()),
            cache: ResultCache::new(),
        }
    }

    /// Override the cache TTL and entry bound. Intended for tests and
    /// hosts with unusual navigation patterns.
    pub fn with_cache_limits(mut self, ttl: Duration, capacity: usize) -> Self {
        self.cache = ResultCache::with_limits(ttl, capacity);
        self
    }

    /// Classify a page.
    ///
    /// Always resolves to a verdict; absence of a document merely
    /// disables the two document-dependent passes. The signature is
    /// async so hosts can await document access uniformly — no work in
    /// here suspends.
    pub async fn detect(
        &self,
        url: &str,
        document: Option<&dyn DocumentView>,
    ) -> DetectionResult {
        let key = normalize_url(url);

        if let Some(hit) = self.cache.get(&key) {
            trace!(url = %key, "returning cached verdict");
            return hit;
        }

        let config = self.config.read().unwrap().clone();
        let result = CASCADE
            .iter()
            .find_map(|pass| self.run_pass(*pass, &key, document, &config))
            // Every pass abstained: a generic webpage, with no strong
            // signal either way.
            .unwrap_or_else(|| DetectionResult::webpage(DetectionSource::Url, 0.5));

        debug!(
            url = %key,
            page_type = ?result.page_type,
            source = ?result.source,
            confidence = result.confidence,
            "classified page"
        );
        self.cache.put(key, result.clone());
        result
    }

    fn run_pass(
        &self,
        pass: Pass,
        url: &str,
        document: Option<&dyn DocumentView>,
        config: &DetectorConfig,
    ) -> Option<DetectionResult> {
        match pass {
            Pass::UrlRules if config.enable_url_rules => {
                rules::classify_url(url, &self.rules, &config.custom_domains)
            }
            Pass::MetaTags if config.enable_meta_tags => {
                document.and_then(|doc| meta::classify_meta(doc, &config.meta_tags))
            }
            Pass::StructuredData if config.enable_json_ld => {
                document.and_then(structured::classify_structured)
            }
            Pass::ManualMarks => self.marks.read().unwrap().lookup(url),
            _ => None,
        }
    }

    // ---- configuration surface ----

    /// The current configuration, as an owned copy.
    pub fn config(&self) -> DetectorConfig {
        self.config.read().unwrap().clone()
    }

    /// Replace the configuration and drop all cached verdicts.
    pub fn update_config(&self, config: DetectorConfig) {
        *self.config.write().unwrap() = config;
        self.cache.clear();
    }

    /// Add a custom paper domain. The cache is dropped only when the
    /// domain was actually new.
    pub fn add_custom_domain(&self, domain: impl Into<String>) {
        let domain = domain.into();
        let added = {
            let mut config = self.config.write().unwrap();
            if config.custom_domains.contains(&domain) {
                false
            } else {
                config.custom_domains.push(domain);
                true
            }
        };
        if added {
            self.cache.clear();
        }
    }

    /// Remove a custom paper domain.
    pub fn remove_custom_domain(&self, domain: &str) {
        self.config
            .write()
            .unwrap()
            .custom_domains
            .retain(|d| d != domain);
        self.cache.clear();
    }

    /// Add or update a manual mark for a URL pattern.
    pub fn add_manual_mark(&self, pattern: impl Into<String>, page_type: PageType) {
        self.marks.write().unwrap().add(pattern, page_type);
        self.cache.clear();
    }

    /// Remove the manual mark with the given pattern.
    pub fn remove_manual_mark(&self, pattern: &str) {
        self.marks.write().unwrap().remove(pattern);
        self.cache.clear();
    }

    /// All manual marks, as owned copies.
    pub fn manual_marks(&self) -> Vec<ManualMark> {
        self.marks.read().unwrap().list()
    }

    /// Replace the manual mark list, e.g. from persisted state.
    pub fn set_manual_marks(&self, marks: Vec<ManualMark>) {
        self.marks.write().unwrap().replace_all(marks);
        self.cache.clear();
    }

    /// Drop all cached verdicts.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of cached verdicts.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Normalize a URL for matching and cache keying: parse, strip the
/// fragment, re-serialize. An unparseable URL is used as-is, so detection
/// degrades gracefully instead of failing.
pub fn normalize_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}
