//! Immutable hypermedia JSON documents.
//!
//! This crate post-processes a JSON document as it is built, bottom-up, into
//! an immutable tree with structural hashes and resolved hypermedia links.
//!
//! ## What we do
//!
//! - Every object and array becomes an immutable node with a memoized 32-bit
//!   structural hash, composed from its children's hashes
//! - Mutating operations on nodes fail with a typed error naming the operation
//! - `href` fields are resolved: `#fragment` references against the document
//!   base, everything else gets its query parameters sorted
//! - The root is sealed: containers under `collection`/`data` keys get an
//!   href derived from their position, then everything is frozen
//!
//! ## Pure function guarantee
//!
//! No global state and no I/O beyond reading the input. Same document, base
//! and config give the same tree and the same hashes.
//!
//! ## Invariants worth knowing
//!
//! - Structurally equal documents hash equally, whatever their key order
//! - Hashes are not cryptographic and not stable across crate versions
//! - An existing href is never overwritten by a synthesized one
//! - A missing base is a diagnostic, never an error
//!
//! ```rust
//! use hyperjson::{parse_str, ParseConfig};
//!
//! let base = "http://example.com";
//! let doc = parse_str(
//!     r##"{"href": "/", "user": {"name": {"href": "#/name"}}, "name": "Joe"}"##,
//!     base,
//!     &ParseConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(doc.root()["user"]["name"]["href"].as_str(), Some("http://example.com#/name"));
//! assert!(doc.root().is_sealed());
//! ```

mod builder;
mod config;
mod document;
mod error;
mod guard;
mod hash;
mod href;
mod node;
mod reader;
mod reviver;
mod seal;

pub use crate::builder::{build, build_array, build_object};
pub use crate::config::{DEFAULT_TRANSPARENT_KEYS, ParseConfig};
pub use crate::document::{Document, Link};
pub use crate::error::{HyperJsonError, Result};
pub use crate::guard::{ArrayOp, ObjectOp};
pub use crate::hash::{
    append_hash, combine, compute_hash, compute_raw_hash, hash_number, hash_string, smi, to_int32,
};
pub use crate::href::{normalize_query, resolve_href};
pub use crate::node::{ImmutableArray, ImmutableObject, Node};
pub use crate::reader::{from_value, parse_reader, parse_slice, parse_str};
pub use crate::reviver::{Key, RawValue, Reviver, revive, revive_with_base};
pub use crate::seal::{Diagnostic, SealReport, seal};
