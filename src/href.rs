//! Href resolution.
//!
//! Two rules, applied once when an `href` string is read:
//!
//! 1. A fragment reference (`#/users/1`) is relative to the document itself
//!    and becomes `base + href`.
//! 2. Anything else keeps its path and fragment, but its query parameters are
//!    sorted so that hrefs differing only in parameter order compare equal
//!    byte for byte.
//!
//! ```rust
//! use hyperjson::{resolve_href, ParseConfig};
//!
//! let cfg = ParseConfig::default();
//! assert_eq!(resolve_href("http://a.io", "#/x", &cfg), "http://a.io#/x");
//! assert_eq!(resolve_href("", "/u?y=2&x=1", &cfg), "/u?x=1&y=2");
//! ```

use crate::config::ParseConfig;

/// Resolve a raw `href` value against the document base.
pub fn resolve_href(base: &str, href: &str, cfg: &ParseConfig) -> String {
    if href.starts_with('#') {
        let mut out = String::with_capacity(base.len() + href.len());
        out.push_str(base);
        out.push_str(href);
        return out;
    }
    if !cfg.sort_query {
        return href.to_string();
    }
    normalize_query(href)
}

/// Sort the query parameters of `href`.
///
/// Empty parameters are dropped and a trailing `#fragment` is kept in place.
/// An href whose query ends up empty loses its `?`.
pub fn normalize_query(href: &str) -> String {
    let (head, fragment) = match href.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (href, None),
    };
    let Some((path, query)) = head.split_once('?') else {
        return href.to_string();
    };

    let mut params: Vec<&str> = query.split('&').filter(|p| !p.is_empty()).collect();
    params.sort();

    let mut out = String::with_capacity(href.len());
    out.push_str(path);
    if !params.is_empty() {
        out.push('?');
        out.push_str(&params.join("&"));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
