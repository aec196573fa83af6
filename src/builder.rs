//! Node builder: turns a staged container into an immutable, hashed node.
//!
//! Construction is two-phase. The reader collects a container's already
//! transformed children into a plain staging value ([`RawValue`]); the builder
//! then folds their hashes and moves them into an [`ImmutableObject`] or
//! [`ImmutableArray`] in one step. Nothing can observe the container between
//! the two phases.
//!
//! Object entries fold in key order (the staging map is a `BTreeMap`), so two
//! objects with the same entries hash equally whatever order their source
//! text listed the keys in. Array elements fold in index order, keyed by their
//! decimal index.

use std::collections::BTreeMap;

use crate::hash::{append_hash, combine, compute_hash, hash_string, smi};
use crate::node::{ImmutableArray, ImmutableObject, Node};
use crate::reviver::RawValue;

/// Build an immutable object from its transformed entries.
pub fn build_object(entries: BTreeMap<String, Node>) -> ImmutableObject {
    let hash = entries
        .iter()
        .fold(0, |acc, (key, value)| fold_entry(acc, hash_string(key), value));
    ImmutableObject::from_parts(entries, smi(hash))
}

/// Build an immutable array from its transformed elements.
pub fn build_array(items: Vec<Node>) -> ImmutableArray {
    let hash = items.iter().enumerate().fold(0, |acc, (index, value)| {
        fold_entry(acc, hash_string(&index.to_string()), value)
    });
    ImmutableArray::from_parts(items, smi(hash))
}

/// Convert a staged value into a node. Primitives pass through unchanged.
pub fn build(raw: RawValue) -> Node {
    match raw {
        RawValue::Null => Node::Null,
        RawValue::Bool(b) => Node::Bool(b),
        RawValue::Number(n) => Node::Number(n),
        RawValue::String(s) => Node::String(s),
        RawValue::Object(entries) => Node::Object(build_object(entries)),
        RawValue::Array(items) => Node::Array(build_array(items)),
    }
}

#[inline]
fn fold_entry(acc: i32, key_hash: i32, value: &Node) -> i32 {
    append_hash(acc, combine(key_hash, compute_hash(value)))
}
