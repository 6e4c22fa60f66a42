//! Typed errors for the detection library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Detection itself never fails: `PageDetector::detect` always returns a
//! verdict. These errors type the fallible internals — structured-data
//! parsing and wildcard compilation — whose failures the cascade
//! downgrades to an abstain through explicit match arms.

use thiserror::Error;

/// Errors that can occur inside classification internals.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// A wildcard pattern did not compile to a valid expression.
    #[error("invalid wildcard pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A structured-data block was not valid JSON.
    #[error("malformed structured data block: {0}")]
    MalformedBlock(#[from] serde_json::Error),
}

/// Result type alias for detection internals.
pub type Result<T> = std::result::Result<T, DetectionError>;
