//! Immutable document nodes.
//!
//! A parsed document is a strict tree of [`Node`] values. Composite nodes
//! ([`ImmutableObject`] and [`ImmutableArray`]) carry a memoized structural
//! hash and an optional href, and expose read access only. Their entries are
//! fixed at construction by the builder; the only late write is the href slot,
//! which the sealer fills once before freezing the node.
//!
//! ```rust
//! use hyperjson::{parse_str, Node, ParseConfig};
//!
//! let doc = parse_str(r#"{"tags": ["a", "b"]}"#, "", &ParseConfig::default()).unwrap();
//! let tags = doc.root()["tags"].as_array().unwrap();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[1], Node::String("b".into()));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::{Deref, Index};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};

use crate::hash::compute_hash;

static NULL: Node = Node::Null;

/// One value of an immutable document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(ImmutableObject),
    Array(ImmutableArray),
}

/// Per-container bookkeeping shared by objects and arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Meta {
    hash: i32,
    href: Option<String>,
    sealed: bool,
}

impl Meta {
    fn new(hash: i32) -> Self {
        Self {
            hash,
            href: None,
            sealed: false,
        }
    }

    /// Fill the href slot. Refused once sealed or already filled.
    pub(crate) fn assign_href(&mut self, href: String) -> bool {
        if self.sealed || self.href.is_some() {
            return false;
        }
        self.href = Some(href);
        true
    }

    pub(crate) fn freeze(&mut self) {
        self.sealed = true;
    }
}

/// An object whose entries can no longer be added, removed or reassigned.
///
/// Keys live in a [`BTreeMap`], so lookups only ever see keys that were in
/// the source document and iteration is in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableObject {
    entries: BTreeMap<String, Node>,
    meta: Meta,
}

/// An array whose elements can no longer be added, removed or reassigned.
///
/// Dereferences to `[Node]`, so indexing, `len`, `iter` and every other
/// read-only slice method work as usual. The mutating operations of a
/// growable sequence are rejected, see [`crate::guard`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableArray {
    items: Vec<Node>,
    meta: Meta,
}

impl ImmutableObject {
    pub(crate) fn from_parts(entries: BTreeMap<String, Node>, hash: i32) -> Self {
        Self {
            entries,
            meta: Meta::new(hash),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Memoized structural hash.
    pub fn hash(&self) -> i32 {
        self.meta.hash
    }

    /// The object's address: its own `href` string entry if it has one,
    /// otherwise the href synthesized while sealing.
    pub fn href(&self) -> Option<&str> {
        match self.entries.get("href") {
            Some(Node::String(href)) => Some(href),
            _ => self.meta.href.as_deref(),
        }
    }

    /// The href assigned by the sealer, if any.
    pub fn synthesized_href(&self) -> Option<&str> {
        self.meta.href.as_deref()
    }

    pub fn is_sealed(&self) -> bool {
        self.meta.sealed
    }

    pub(crate) fn entries_mut(&mut self) -> btree_map::IterMut<'_, String, Node> {
        self.entries.iter_mut()
    }
}

impl ImmutableArray {
    pub(crate) fn from_parts(items: Vec<Node>, hash: i32) -> Self {
        Self {
            items,
            meta: Meta::new(hash),
        }
    }

    /// Memoized structural hash.
    pub fn hash(&self) -> i32 {
        self.meta.hash
    }

    /// The href synthesized while sealing, if any.
    pub fn href(&self) -> Option<&str> {
        self.meta.href.as_deref()
    }

    pub fn is_sealed(&self) -> bool {
        self.meta.sealed
    }

    pub(crate) fn items_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.items.iter_mut()
    }
}

impl Deref for ImmutableArray {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ImmutableArray {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ImmutableObject {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Node {
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Object(_) | Node::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ImmutableObject> {
        match self {
            Node::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ImmutableArray> {
        match self {
            Node::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Object field lookup; `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Structural hash. Memoized for composites, computed for primitives.
    pub fn hash(&self) -> i32 {
        compute_hash(self)
    }

    /// Address of a composite node, see [`ImmutableObject::href`].
    pub fn href(&self) -> Option<&str> {
        match self {
            Node::Object(obj) => obj.href(),
            Node::Array(arr) => arr.href(),
            _ => None,
        }
    }

    pub fn synthesized_href(&self) -> Option<&str> {
        self.meta().and_then(|meta| meta.href.as_deref())
    }

    /// Whether the node has been sealed. Primitives are always immutable.
    pub fn is_sealed(&self) -> bool {
        self.meta().is_none_or(|meta| meta.sealed)
    }

    /// Look up a value by JSON pointer (`/user/name`, `~1` and `~0` escapes).
    pub fn pointer(&self, pointer: &str) -> Option<&Node> {
        if pointer.is_empty() {
            return Some(self);
        }
        let rest = pointer.strip_prefix('/')?;
        rest.split('/')
            .map(|token| token.replace("~1", "/").replace("~0", "~"))
            .try_fold(self, |node, token| match node {
                Node::Object(obj) => obj.get(&token),
                Node::Array(arr) => token.parse::<usize>().ok().and_then(|i| arr.get(i)),
                _ => None,
            })
    }

    /// Convert back into a plain `serde_json::Value`.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Object(obj) => Value::Object(
                obj.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Node::Array(arr) => Value::Array(arr.iter().map(Node::to_json).collect()),
        }
    }

    fn meta(&self) -> Option<&Meta> {
        match self {
            Node::Object(obj) => Some(&obj.meta),
            Node::Array(arr) => Some(&arr.meta),
            _ => None,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> Option<&mut Meta> {
        match self {
            Node::Object(obj) => Some(&mut obj.meta),
            Node::Array(arr) => Some(&mut arr.meta),
            _ => None,
        }
    }
}

impl Index<&str> for ImmutableObject {
    type Output = Node;

    fn index(&self, key: &str) -> &Node {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl Index<&str> for Node {
    type Output = Node;

    /// Missing keys and non-objects index to `Node::Null`.
    fn index(&self, key: &str) -> &Node {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        self.as_array()
            .and_then(|arr| arr.get(index))
            .unwrap_or(&NULL)
    }
}

impl Serialize for Node {
    /// Serializes entries only; hashes and synthesized hrefs are metadata.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Array(arr) => serializer.collect_seq(arr.iter()),
        }
    }
}
