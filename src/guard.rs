//! Mutation guards for immutable containers.
//!
//! [`ImmutableArray`] and [`ImmutableObject`] expose the mutating operations
//! callers expect from growable containers, but every one of them fails with
//! [`HyperJsonError::MutationRejected`] naming the attempted operation. Read
//! access is untouched. The guard is part of the type, so there is no window
//! between construction and guarding in which a container is mutable.
//!
//! ```rust
//! use hyperjson::{parse_str, HyperJsonError, Node, ParseConfig};
//!
//! let doc = parse_str(r#"{"test": []}"#, "", &ParseConfig::default()).unwrap();
//! let mut root = doc.into_root();
//! let Node::Object(obj) = &mut root else { unreachable!() };
//! let err = obj.insert("other", Node::Bool(true)).unwrap_err();
//! assert_eq!(err.to_string(), "attempted to mutate an immutable object with insert()");
//! ```

use crate::error::{HyperJsonError, Result};
use crate::node::{ImmutableArray, ImmutableObject, Node};

/// Mutating array operations that are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayOp {
    /// Append to the end.
    Push,
    /// Remove from the end.
    Pop,
    /// Remove from the front.
    Shift,
    /// Prepend to the front.
    Unshift,
    /// Insert and/or delete a run of elements.
    Splice,
    /// Reassign an element in place.
    Set,
}

/// Mutating object operations that are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectOp {
    /// Add a key or reassign an existing one.
    Insert,
    /// Delete a key.
    Remove,
}

impl ArrayOp {
    pub const ALL: [ArrayOp; 6] = [
        ArrayOp::Push,
        ArrayOp::Pop,
        ArrayOp::Shift,
        ArrayOp::Unshift,
        ArrayOp::Splice,
        ArrayOp::Set,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArrayOp::Push => "push",
            ArrayOp::Pop => "pop",
            ArrayOp::Shift => "shift",
            ArrayOp::Unshift => "unshift",
            ArrayOp::Splice => "splice",
            ArrayOp::Set => "set",
        }
    }

    fn reject(self) -> HyperJsonError {
        HyperJsonError::MutationRejected {
            target: "array",
            operation: self.name(),
        }
    }
}

impl ObjectOp {
    pub fn name(self) -> &'static str {
        match self {
            ObjectOp::Insert => "insert",
            ObjectOp::Remove => "remove",
        }
    }

    fn reject(self) -> HyperJsonError {
        HyperJsonError::MutationRejected {
            target: "object",
            operation: self.name(),
        }
    }
}

impl ImmutableArray {
    /// Always fails: arrays cannot grow.
    pub fn push(&mut self, _value: Node) -> Result<usize> {
        Err(ArrayOp::Push.reject())
    }

    /// Always fails: arrays cannot shrink.
    pub fn pop(&mut self) -> Result<Option<Node>> {
        Err(ArrayOp::Pop.reject())
    }

    /// Always fails: arrays cannot shrink.
    pub fn shift(&mut self) -> Result<Option<Node>> {
        Err(ArrayOp::Shift.reject())
    }

    /// Always fails: arrays cannot grow.
    pub fn unshift(&mut self, _values: Vec<Node>) -> Result<usize> {
        Err(ArrayOp::Unshift.reject())
    }

    /// Always fails, including for a no-op splice.
    pub fn splice(
        &mut self,
        _start: usize,
        _delete_count: usize,
        _items: Vec<Node>,
    ) -> Result<Vec<Node>> {
        Err(ArrayOp::Splice.reject())
    }

    /// Always fails: elements cannot be reassigned.
    pub fn set(&mut self, _index: usize, _value: Node) -> Result<Node> {
        Err(ArrayOp::Set.reject())
    }
}

impl ImmutableObject {
    /// Always fails, whether `key` is new or already present.
    pub fn insert(&mut self, _key: impl Into<String>, _value: Node) -> Result<Option<Node>> {
        Err(ObjectOp::Insert.reject())
    }

    /// Always fails, whether `key` is present or not.
    pub fn remove(&mut self, _key: &str) -> Result<Option<Node>> {
        Err(ObjectOp::Remove.reject())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::builder::{build_array, build_object};

    fn rejected(target: &'static str, operation: &'static str) -> HyperJsonError {
        HyperJsonError::MutationRejected { target, operation }
    }

    #[test]
    fn every_array_mutation_is_rejected() {
        let mut arr = build_array(vec![Node::Number(1.into()), Node::Number(2.into())]);

        assert_eq!(arr.push(Node::Null), Err(rejected("array", "push")));
        assert_eq!(arr.pop(), Err(rejected("array", "pop")));
        assert_eq!(arr.shift(), Err(rejected("array", "shift")));
        assert_eq!(arr.unshift(vec![Node::Null]), Err(rejected("array", "unshift")));
        assert_eq!(arr.splice(0, 0, Vec::new()), Err(rejected("array", "splice")));
        assert_eq!(arr.set(0, Node::Null), Err(rejected("array", "set")));

        // Reads still behave like the underlying sequence.
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0], Node::Number(1.into()));
        assert_eq!(arr.iter().count(), 2);
        assert!(arr.contains(&Node::Number(2.into())));
    }

    #[test]
    fn object_mutations_are_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert("foo".to_string(), Node::Number(1.into()));
        let mut obj = build_object(entries);

        assert_eq!(obj.insert("foo", Node::Null), Err(rejected("object", "insert")));
        assert_eq!(obj.insert("other", Node::Null), Err(rejected("object", "insert")));
        assert_eq!(obj.remove("foo"), Err(rejected("object", "remove")));
        assert_eq!(obj["foo"], Node::Number(1.into()));
    }

    #[test]
    fn error_names_the_operation() {
        for op in ArrayOp::ALL {
            let msg = op.reject().to_string();
            assert!(msg.ends_with(&format!("{}()", op.name())), "{msg}");
        }
    }
}
