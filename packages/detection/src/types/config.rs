//! Detection policy configuration.

use serde::{Deserialize, Serialize};

/// Policy for the metadata-tag classification pass.
///
/// A document qualifies only when every required tag carries a non-empty
/// value; the share of optional tags present drives the confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTagPolicy {
    /// Tags that must all be present with non-empty values.
    pub required_tags: Vec<String>,

    /// Tag pool contributing to the confidence score.
    pub optional_tags: Vec<String>,

    /// Minimum number of optional tags required to qualify at all.
    ///
    /// A value above the optional pool size is accepted without
    /// validation; the pass then always abstains.
    pub min_optional_count: usize,
}

impl Default for MetaTagPolicy {
    fn default() -> Self {
        Self {
            required_tags: vec!["citation_title".to_string()],
            optional_tags: [
                "citation_author",
                "citation_doi",
                "citation_journal_title",
                "citation_publication_date",
                "citation_volume",
                "citation_issue",
                "citation_publisher",
                "citation_abstract",
                "citation_pmid",
                "citation_issn",
                "citation_firstpage",
                "citation_lastpage",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            min_optional_count: 2,
        }
    }
}

impl MetaTagPolicy {
    /// Create a policy with the default citation tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the required tag list.
    pub fn with_required_tags(
        mut self,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.required_tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Replace the optional tag pool.
    pub fn with_optional_tags(
        mut self,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.optional_tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Set the optional-tag floor.
    pub fn with_min_optional_count(mut self, count: usize) -> Self {
        self.min_optional_count = count;
        self
    }
}

/// Process-wide detection policy, owned by one detector instance.
///
/// Accessors on the detector hand out owned clones, so a caller can never
/// mutate internal policy by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Run the URL rule table pass.
    pub enable_url_rules: bool,

    /// Run the metadata-tag pass (requires a document).
    pub enable_meta_tags: bool,

    /// Run the structured-data pass (requires a document).
    pub enable_json_ld: bool,

    /// Extra domains treated as paper platforms, matched by containment.
    #[serde(default)]
    pub custom_domains: Vec<String>,

    /// Metadata-tag pass policy.
    pub meta_tags: MetaTagPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            enable_url_rules: true,
            enable_meta_tags: true,
            enable_json_ld: true,
            custom_domains: vec![],
            meta_tags: MetaTagPolicy::default(),
        }
    }
}

impl DetectorConfig {
    /// Create a config with all passes enabled and no custom domains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the URL rule pass.
    pub fn with_url_rules(mut self, enabled: bool) -> Self {
        self.enable_url_rules = enabled;
        self
    }

    /// Enable or disable the metadata-tag pass.
    pub fn with_meta_tags(mut self, enabled: bool) -> Self {
        self.enable_meta_tags = enabled;
        self
    }

    /// Enable or disable the structured-data pass.
    pub fn with_json_ld(mut self, enabled: bool) -> Self {
        self.enable_json_ld = enabled;
        self
    }

    /// Replace the custom domain list.
    pub fn with_custom_domains(
        mut self,
        domains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.custom_domains = domains.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Replace the metadata-tag policy.
    pub fn with_meta_tag_policy(mut self, policy: MetaTagPolicy) -> Self {
        self.meta_tags = policy;
        self
    }
}
