//! Document reader glue.
//!
//! `serde_json` does the tokenizing; this module replays the parsed value
//! bottom-up through a [`Reviver`], the same post-order a reduction-based
//! parse callback sees: every child is revived before its parent, and the
//! root is revived last with [`Key::Root`].

use std::io::Read;
use std::time::Instant;

use serde_json::Value;
use tracing::{Level, debug, warn};

use crate::config::ParseConfig;
use crate::document::Document;
use crate::error::Result;
use crate::node::Node;
use crate::reviver::{Key, RawValue, Reviver};

/// Parse JSON text into a sealed document.
///
/// # Errors
///
/// Returns [`HyperJsonError::InvalidConfig`](crate::HyperJsonError::InvalidConfig)
/// for a bad config and [`HyperJsonError::Parse`](crate::HyperJsonError::Parse)
/// for malformed JSON.
pub fn parse_str(text: &str, base: &str, cfg: &ParseConfig) -> Result<Document> {
    parse_with(base, cfg, || serde_json::from_str(text))
}

/// Parse JSON bytes into a sealed document.
///
/// # Errors
///
/// Same as [`parse_str`].
pub fn parse_slice(bytes: &[u8], base: &str, cfg: &ParseConfig) -> Result<Document> {
    parse_with(base, cfg, || serde_json::from_slice(bytes))
}

/// Parse JSON from a reader into a sealed document.
///
/// # Errors
///
/// Same as [`parse_str`], plus [`HyperJsonError::Io`](crate::HyperJsonError::Io)
/// when reading fails.
pub fn parse_reader<R: Read>(reader: R, base: &str, cfg: &ParseConfig) -> Result<Document> {
    parse_with(base, cfg, || serde_json::from_reader(reader))
}

/// Revive an already parsed value bottom-up and seal it.
pub fn from_value(value: Value, reviver: &Reviver) -> Document {
    let staged = stage(value, reviver);
    reviver.finish(staged)
}

/// Revive a nested value under `key`. Does not seal.
pub(crate) fn reduce(key: Key<'_>, value: Value, reviver: &Reviver) -> Node {
    let staged = stage(value, reviver);
    reviver.revive(key, staged)
}

fn stage(value: Value, reviver: &Reviver) -> RawValue {
    match value {
        Value::Null => RawValue::Null,
        Value::Bool(b) => RawValue::Bool(b),
        Value::Number(n) => RawValue::Number(n),
        Value::String(s) => RawValue::String(s),
        Value::Object(map) => RawValue::Object(
            map.into_iter()
                .map(|(key, child)| {
                    let node = reduce(Key::Field(&key), child, reviver);
                    (key, node)
                })
                .collect(),
        ),
        Value::Array(items) => RawValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, child)| reduce(Key::Index(index), child, reviver))
                .collect(),
        ),
    }
}

fn parse_with<F>(base: &str, cfg: &ParseConfig, read: F) -> Result<Document>
where
    F: FnOnce() -> serde_json::Result<Value>,
{
    let start = Instant::now();
    cfg.validate()?;

    let span = tracing::span!(Level::INFO, "hyperjson.parse", base = %base);
    let _guard = span.enter();

    let value = match read() {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "parse_failure");
            return Err(err.into());
        }
    };

    let reviver = Reviver::with_config(base, cfg.clone());
    let doc = from_value(value, &reviver);
    debug!(
        hash = doc.hash(),
        synthesized = doc.synthesized_count(),
        sealed = doc.sealed_count(),
        diagnostics = doc.diagnostics().len(),
        elapsed_micros = start.elapsed().as_micros(),
        "parse_success"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HyperJsonError;
    use serde_json::json;

    #[test]
    fn children_are_revived_before_parents() {
        let reviver = Reviver::new("http://h");
        let doc = from_value(json!({"a": {"href": "#/a"}, "b": [{"href": "#/b"}]}), &reviver);
        assert_eq!(doc.root()["a"]["href"].as_str(), Some("http://h#/a"));
        assert_eq!(doc.root()["b"][0]["href"].as_str(), Some("http://h#/b"));
        assert!(doc.root()["b"].is_sealed());
    }

    #[test]
    fn reduce_does_not_seal() {
        let node = reduce(Key::Field("x"), json!({"data": {}}), &Reviver::new("b"));
        assert!(!node.is_sealed());
        assert_eq!(node["data"].href(), None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let res = parse_str("{not json", "", &ParseConfig::default());
        assert!(matches!(res, Err(HyperJsonError::Parse(_))));
    }

    #[test]
    fn invalid_config_is_rejected_before_reading() {
        let cfg = ParseConfig {
            transparent_keys: vec![String::new()],
            ..Default::default()
        };
        let res = parse_str("{}", "", &cfg);
        assert!(matches!(res, Err(HyperJsonError::InvalidConfig(_))));
    }

    #[test]
    fn slice_and_str_agree() {
        let text = r#"{"x": [1, 2, {"y": null}]}"#;
        let cfg = ParseConfig::default();
        let a = parse_str(text, "b", &cfg).expect("str parses");
        let b = parse_slice(text.as_bytes(), "b", &cfg).expect("slice parses");
        assert_eq!(a, b);
    }

    #[test]
    fn primitive_root() {
        let doc = parse_str("42", "b", &ParseConfig::default()).expect("parses");
        assert_eq!(doc.root().as_f64(), Some(42.0));
        assert_eq!(doc.hash(), 42);
        assert!(doc.links().is_empty());
    }
}
