//! Configuration for the document pipeline.
//!
//! [`ParseConfig`] controls the few behaviours of the pipeline that callers
//! may legitimately want to change: whether missing-base diagnostics are
//! reported, whether query strings are canonicalized, and which keys make a
//! container transparent for href synthesis.
//!
//! # Examples
//!
//! ```rust
//! use hyperjson::ParseConfig;
//!
//! let config = ParseConfig::default();
//! assert!(config.diagnostics_enabled);
//! assert!(config.sort_query);
//! assert_eq!(config.transparent_keys, vec!["collection", "data"]);
//! ```
//!
//! ## Fragment-only resolution
//!
//! Older consumers that compare hrefs byte for byte against the raw source
//! can switch query sorting off:
//!
//! ```rust
//! use hyperjson::ParseConfig;
//!
//! let config = ParseConfig {
//!     sort_query: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{HyperJsonError, Result};

/// Keys whose values do not contribute a path segment when sealing.
pub const DEFAULT_TRANSPARENT_KEYS: [&str; 2] = ["collection", "data"];

/// Runtime configuration for parsing and sealing documents.
///
/// Cheap to clone and serializable, so it can live inside a larger
/// application config:
///
/// ```json
/// {
///   "diagnostics_enabled": true,
///   "sort_query": true,
///   "transparent_keys": ["collection", "data"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParseConfig {
    /// Report nodes that should carry a synthesized href but have no base
    /// address to build it from.
    ///
    /// Reports go to `tracing` at `WARN` and into
    /// [`Document::diagnostics`](crate::Document::diagnostics). Turning this
    /// off silences both; the node is left without an href either way.
    pub diagnostics_enabled: bool,

    /// Sort the query parameters of non-fragment hrefs.
    ///
    /// When `false` only `#fragment` hrefs are rewritten (against the base);
    /// everything else is returned verbatim.
    pub sort_query: bool,

    /// Keys whose values are collection/data-transparent during sealing.
    pub transparent_keys: Vec<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            diagnostics_enabled: true,
            sort_query: true,
            transparent_keys: DEFAULT_TRANSPARENT_KEYS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }
}

impl ParseConfig {
    /// Check the configuration for values the pipeline cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`HyperJsonError::InvalidConfig`] when `transparent_keys`
    /// contains an empty key.
    pub fn validate(&self) -> Result<()> {
        if self.transparent_keys.iter().any(String::is_empty) {
            return Err(HyperJsonError::InvalidConfig(
                "transparent_keys must not contain an empty key".into(),
            ));
        }
        Ok(())
    }

    /// Whether `key` is one of the configured transparent keys.
    pub fn is_transparent(&self, key: &str) -> bool {
        self.transparent_keys.iter().any(|k| k == key)
    }
}
