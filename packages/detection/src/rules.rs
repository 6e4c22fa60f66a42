//! URL rule table and pattern matcher.
//!
//! The first classification pass: a static, priority-ordered table of
//! per-platform URL patterns, optionally augmented by user-configured
//! custom domains. Matching is cheap enough to run on every page load.

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{DetectionError, Result};
use crate::types::result::{DetectionResult, DetectionSource};

/// A single URL matching pattern.
///
/// Three interpretations, decided by the pattern's own form: a real
/// regular expression (built-in rules only), a `*` glob, or a plain
/// substring.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Full regular expression. Only the built-in table constructs these.
    Regex(Regex),
    /// Glob where `*` matches any characters, anchored at both ends.
    Wildcard(String),
    /// Substring containment.
    Substring(String),
}

impl UrlPattern {
    /// Build a pattern from a plain string: a glob when it contains `*`,
    /// a substring otherwise. User-supplied patterns (custom domains,
    /// manual marks) go through here and are never interpreted as
    /// regular expressions.
    pub fn literal(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.contains('*') {
            UrlPattern::Wildcard(pattern)
        } else {
            UrlPattern::Substring(pattern)
        }
    }

    /// Test a URL against this pattern.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Regex(expression) => expression.is_match(url),
            UrlPattern::Wildcard(pattern) => match compile_wildcard(pattern) {
                Ok(expression) => expression.is_match(url),
                Err(err) => {
                    warn!(%err, "wildcard pattern does not compile, matching nothing");
                    false
                }
            },
            UrlPattern::Substring(needle) => url.contains(needle),
        }
    }
}

/// Compile a `*` glob into an anchored regular expression.
///
/// Each `*` expands to `.*`. Other regex metacharacters pass through
/// unescaped and keep their regex meaning, so `.` in a domain glob
/// matches any character.
pub fn compile_wildcard(pattern: &str) -> Result<Regex> {
    let expression = format!("^{}$", pattern.replace('*', ".*"));
    Regex::new(&expression).map_err(|source| DetectionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// One platform's URL patterns and its place in the evaluation order.
#[derive(Debug, Clone)]
pub struct UrlRule {
    /// Platform name reported on a match.
    pub platform: String,

    /// Patterns tried in listed order.
    pub patterns: Vec<UrlPattern>,

    /// Higher priorities are evaluated first.
    pub priority: i32,
}

impl UrlRule {
    /// Create a rule.
    pub fn new(platform: impl Into<String>, patterns: Vec<UrlPattern>, priority: i32) -> Self {
        Self {
            platform: platform.into(),
            patterns,
            priority,
        }
    }
}

fn re(expression: &str) -> UrlPattern {
    UrlPattern::Regex(Regex::new(expression).unwrap())
}

/// The built-in platform rule table.
///
/// Table order is the tie-breaker among equal priorities once the
/// detector's stable sort has run: DOI is listed ahead of the other
/// priority-90 publisher rules, so it wins ties against their `/doi/`
/// paths. Publisher rules beat DOI only from a strictly higher priority.
pub fn default_url_rules() -> Vec<UrlRule> {
    vec![
        UrlRule::new(
            "arXiv",
            vec![re(r"arxiv\.org/abs/"), re(r"arxiv\.org/pdf/")],
            100,
        ),
        UrlRule::new("PubMed", vec![re(r"pubmed\.ncbi\.nlm\.nih\.gov/")], 100),
        UrlRule::new(
            "DOI",
            vec![re(r"^https?://(dx\.)?doi\.org/"), re(r"/doi/(10\.\d{4,})")],
            90,
        ),
        UrlRule::new("IEEE", vec![re(r"ieeexplore\.ieee\.org/document/")], 95),
        UrlRule::new("ACM", vec![re(r"dl\.acm\.org/doi/")], 95),
        UrlRule::new(
            "Springer",
            vec![re(r"link\.springer\.com/(article|chapter|book)/")],
            90,
        ),
        UrlRule::new(
            "ScienceDirect",
            vec![
                re(r"sciencedirect\.com/science/"),
                re(r"sciencedirect\.com/article/"),
            ],
            90,
        ),
        UrlRule::new("Wiley", vec![re(r"onlinelibrary\.wiley\.com/doi/")], 90),
        UrlRule::new("Nature", vec![re(r"nature\.com/articles/")], 95),
        UrlRule::new("Science", vec![re(r"science\.org/doi/")], 95),
        UrlRule::new("PNAS", vec![re(r"pnas\.org/doi/")], 90),
        UrlRule::new("ACL", vec![re(r"aclanthology\.org/")], 90),
        UrlRule::new("OpenReview", vec![re(r"openreview\.net/forum\?id=")], 90),
        UrlRule::new(
            "SemanticScholar",
            vec![re(r"semanticscholar\.org/paper/")],
            85,
        ),
        UrlRule::new(
            "GoogleScholar",
            vec![
                re(r"scholar\.google\.com/scholar\?"),
                re(r"scholar\.google\.[a-z.]+/citations\?"),
            ],
            80,
        ),
        UrlRule::new("DBLP", vec![re(r"dblp\.[a-z]+/rec/"), re(r"dblp\.org/rec/")], 85),
    ]
}

/// Classify a URL against the rule table and custom domains.
///
/// `rules` must already be sorted by descending priority; the first
/// matching pattern across all rules wins. Custom domains are consulted
/// only after every built-in rule has missed.
pub fn classify_url(
    url: &str,
    rules: &[UrlRule],
    custom_domains: &[String],
) -> Option<DetectionResult> {
    for rule in rules {
        for pattern in &rule.patterns {
            if pattern.matches(url) {
                debug!(platform = %rule.platform, "URL matched platform rule");
                return Some(
                    DetectionResult::paper(DetectionSource::Url, 0.95)
                        .with_platform(rule.platform.clone()),
                );
            }
        }
    }

    for domain in custom_domains {
        if url.contains(domain.as_str()) {
            debug!(%domain, "URL matched custom domain");
            return Some(
                DetectionResult::paper(DetectionSource::Url, 0.85).with_platform("Custom"),
            );
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::result::PageType;

    fn sorted_rules() -> Vec<UrlRule> {
        let mut rules = default_url_rules();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        rules
    }

    fn platform_for(url: &str) -> Option<String> {
        classify_url(url, &sorted_rules(), &[]).and_then(|r| r.platform)
    }

    #[test]
    fn test_platform_table_coverage() {
        let cases = [
            ("https://arxiv.org/abs/2301.12345", "arXiv"),
            ("https://arxiv.org/pdf/2301.12345.pdf", "arXiv"),
            ("https://arxiv.org/abs/2301.12345v2", "arXiv"),
            ("https://pubmed.ncbi.nlm.nih.gov/12345678/", "PubMed"),
            ("https://doi.org/10.1000/xyz123", "DOI"),
            ("https://dx.doi.org/10.1000/xyz123", "DOI"),
            ("https://example.com/doi/10.1234/test", "DOI"),
            ("https://ieeexplore.ieee.org/document/1234567", "IEEE"),
            (
                "https://link.springer.com/article/10.1007/s12345-023-00001-x",
                "Springer",
            ),
            (
                "https://link.springer.com/chapter/10.1007/12345_1",
                "Springer",
            ),
            (
                "https://www.sciencedirect.com/science/article/pii/S0000000000000000",
                "ScienceDirect",
            ),
            ("https://www.nature.com/articles/s12345-023-00001-x", "Nature"),
            ("https://www.science.org/doi/10.1126/science.1234567", "Science"),
            ("https://aclanthology.org/2023.acl-long.1", "ACL"),
            ("https://openreview.net/forum?id=abc123", "OpenReview"),
            (
                "https://www.semanticscholar.org/paper/abc123/def456",
                "SemanticScholar",
            ),
            (
                "https://scholar.google.com/scholar?q=machine+learning",
                "GoogleScholar",
            ),
            (
                "https://scholar.google.co.jp/citations?user=abc123",
                "GoogleScholar",
            ),
            ("https://dblp.org/rec/conf/icml/Author2023", "DBLP"),
            ("https://dblp.de/rec/conf/icml/Author2023", "DBLP"),
        ];

        for (url, platform) in cases {
            assert_eq!(platform_for(url).as_deref(), Some(platform), "url: {url}");
        }
    }

    #[test]
    fn test_rule_match_shape() {
        let result = classify_url("https://arxiv.org/abs/2301.12345", &sorted_rules(), &[])
            .expect("arXiv URL should match");
        assert_eq!(result.page_type, PageType::Paper);
        assert_eq!(result.source, DetectionSource::Url);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_higher_priority_wins_over_doi_pattern() {
        // dl.acm.org/doi/ also matches the generic /doi/10.xxxx pattern;
        // ACM sits at priority 95, DOI at 90.
        assert_eq!(
            platform_for("https://dl.acm.org/doi/10.1145/123456").as_deref(),
            Some("ACM")
        );
        // Wiley and DOI share priority 90; the table lists DOI first.
        assert_eq!(
            platform_for("https://onlinelibrary.wiley.com/doi/10.1002/abc123").as_deref(),
            Some("DOI")
        );
    }

    #[test]
    fn test_non_paper_urls_abstain() {
        for url in [
            "https://arxiv.org/",
            "https://www.google.com/",
            "https://www.bbc.com/news/technology",
            "https://medium.com/@user/my-article-123",
        ] {
            assert!(classify_url(url, &sorted_rules(), &[]).is_none(), "url: {url}");
        }
    }

    #[test]
    fn test_custom_domain_checked_after_builtins() {
        let domains = vec!["custom-journal.org".to_string()];
        let result = classify_url(
            "https://custom-journal.org/articles/123",
            &sorted_rules(),
            &domains,
        )
        .expect("custom domain should match");
        assert_eq!(result.platform.as_deref(), Some("Custom"));
        assert_eq!(result.confidence, 0.85);

        // A built-in hit reports its own platform even when a custom
        // domain would also match.
        let domains = vec!["arxiv.org".to_string()];
        let result =
            classify_url("https://arxiv.org/abs/2301.12345", &sorted_rules(), &domains).unwrap();
        assert_eq!(result.platform.as_deref(), Some("arXiv"));
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_literal_pattern_classification() {
        assert!(matches!(
            UrlPattern::literal("*.example.com/*"),
            UrlPattern::Wildcard(_)
        ));
        assert!(matches!(
            UrlPattern::literal("example.com/papers/"),
            UrlPattern::Substring(_)
        ));
    }

    #[test]
    fn test_wildcard_matching_is_anchored() {
        let pattern = UrlPattern::literal("https://*.example.com/papers/*");
        assert!(pattern.matches("https://sub.example.com/papers/123"));
        assert!(!pattern.matches("https://sub.example.com/other/123"));

        // Without a leading wildcard the anchor rejects prefixed URLs.
        let pattern = UrlPattern::literal("example.com/*");
        assert!(!pattern.matches("https://example.com/page"));
    }

    #[test]
    fn wildcard_leaves_other_metacharacters_live() {
        // `.` keeps its regex meaning inside a glob.
        let pattern = UrlPattern::literal("https://a.b/*");
        assert!(pattern.matches("https://aXb/page"));
    }

    #[test]
    fn test_invalid_wildcard_matches_nothing() {
        let pattern = UrlPattern::literal("https://example.com/(*");
        assert!(!pattern.matches("https://example.com/(anything"));
        assert!(compile_wildcard("https://example.com/(*").is_err());
    }

    #[test]
    fn test_substring_never_treated_as_regex() {
        // Metacharacters in a plain pattern are literal text.
        let pattern = UrlPattern::literal("doi/(10");
        assert!(pattern.matches("https://example.com/doi/(10.1234"));
        assert!(!pattern.matches("https://example.com/doi/10.1234"));
    }

    proptest! {
        #[test]
        fn prop_substring_matches_iff_contained(
            needle in "[a-z0-9./-]{1,12}",
            haystack in "[a-z0-9./-]{0,40}",
        ) {
            let pattern = UrlPattern::Substring(needle.clone());
            prop_assert_eq!(pattern.matches(&haystack), haystack.contains(&needle));
        }

        #[test]
        fn prop_star_glob_accepts_any_infix(infix in "[a-z0-9/]{0,20}") {
            let pattern = UrlPattern::literal("https://example.com/*");
            let url = format!("https://example.com/{infix}");
            prop_assert!(pattern.matches(&url));
        }
    }
}
