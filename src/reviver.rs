//! The per-node callback driven by the document reader.
//!
//! A reader constructs the document bottom-up and calls [`Reviver::revive`]
//! once per node, children first, passing the node's key and its staged value
//! (whose children have already been revived). The value returned replaces
//! the node in its parent. The root call, marked with [`Key::Root`], also
//! seals the finished tree.
//!
//! Three ways in, matching how callers usually hold a base address:
//!
//! ```rust
//! use hyperjson::{revive, revive_with_base, Key, Node, RawValue, Reviver};
//!
//! // Bound to a base, reusable for many calls.
//! let reviver = Reviver::new("http://example.com");
//! let href = reviver.revive(Key::Field("href"), RawValue::String("#/a".into()));
//! assert_eq!(href, Node::String("http://example.com#/a".into()));
//!
//! // No base.
//! assert_eq!(
//!     revive(Key::Field("href"), RawValue::String("#/a".into())),
//!     Node::String("#/a".into())
//! );
//!
//! // Explicit base for a single call.
//! assert_eq!(
//!     revive_with_base("b", Key::Field("href"), RawValue::String("#/a".into())),
//!     Node::String("b#/a".into())
//! );
//! ```

use std::collections::BTreeMap;

use serde_json::Number;

use crate::builder::build;
use crate::config::ParseConfig;
use crate::document::Document;
use crate::href::resolve_href;
use crate::node::Node;
use crate::seal::seal;

/// Position of a node within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// The document root.
    Root,
    /// A field of an object.
    Field(&'a str),
    /// An element of an array.
    Index(usize),
}

/// A node as staged by the reader, before it is made immutable.
///
/// Container children are already revived nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(BTreeMap<String, Node>),
    Array(Vec<Node>),
}

/// Per-node transformation bound to one base address.
#[derive(Debug, Clone, Default)]
pub struct Reviver {
    base: String,
    config: ParseConfig,
}

impl Reviver {
    /// Bind to `base` with the default configuration. An empty base means
    /// the document has no address of its own.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_config(base, ParseConfig::default())
    }

    pub fn with_config(base: impl Into<String>, config: ParseConfig) -> Self {
        Self {
            base: base.into(),
            config,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Transform one node. For [`Key::Root`] the result is also sealed;
    /// use [`Reviver::finish`] to keep the seal diagnostics.
    pub fn revive(&self, key: Key<'_>, value: RawValue) -> Node {
        match key {
            Key::Root => self.finish(value).into_root(),
            _ => self.transform(key, value),
        }
    }

    /// Transform and seal the document root.
    ///
    /// Hrefs are synthesized against the reviver's base, or against the
    /// root's own `href` entry when the base is empty.
    pub fn finish(&self, value: RawValue) -> Document {
        let mut root = self.transform(Key::Root, value);
        let base = if self.base.is_empty() {
            root.get("href")
                .and_then(Node::as_str)
                .unwrap_or_default()
                .to_string()
        } else {
            self.base.clone()
        };
        let report = seal(&mut root, &base, &self.config);
        Document::new(root, report)
    }

    fn transform(&self, key: Key<'_>, value: RawValue) -> Node {
        match (key, value) {
            (Key::Field("href"), RawValue::String(href)) => {
                Node::String(resolve_href(&self.base, &href, &self.config))
            }
            (_, value) => build(value),
        }
    }
}

/// Transform one node with no base address.
pub fn revive(key: Key<'_>, value: RawValue) -> Node {
    Reviver::default().revive(key, value)
}

/// Transform one node against an explicit base address.
pub fn revive_with_base(base: &str, key: Key<'_>, value: RawValue) -> Node {
    Reviver::new(base).revive(key, value)
}
