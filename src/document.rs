//! Sealed documents.
//!
//! A [`Document`] is the result of one parse: the sealed root node plus the
//! diagnostics the seal pass produced.
//!
//! ```rust
//! use hyperjson::{parse_str, ParseConfig};
//!
//! let doc = parse_str(
//!     r#"{"users": {"collection": [{"href": "/users/1"}]}}"#,
//!     "http://api.example.com",
//!     &ParseConfig::default(),
//! )
//! .unwrap();
//!
//! let links: Vec<_> = doc.links().into_iter().map(|l| (l.pointer, l.href)).collect();
//! assert_eq!(
//!     links,
//!     vec![
//!         ("/users/collection/0".to_string(), "/users/1".to_string()),
//!         ("/users/collection".to_string(), "http://api.example.com#/users".to_string()),
//!         (String::new(), "http://api.example.com".to_string()),
//!     ]
//! );
//! ```

use serde::Serialize;

use crate::node::Node;
use crate::seal::{Diagnostic, SealReport};

/// A parsed, hashed and sealed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
    diagnostics: Vec<Diagnostic>,
    synthesized: usize,
    sealed: usize,
}

/// An addressable node found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// JSON pointer of the node; empty for the root.
    pub pointer: String,
    pub href: String,
    /// True when the href was derived from the node's position.
    pub synthesized: bool,
}

impl Document {
    pub(crate) fn new(root: Node, report: SealReport) -> Self {
        Self {
            root,
            diagnostics: report.diagnostics,
            synthesized: report.synthesized,
            sealed: report.sealed,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Structural hash of the root.
    pub fn hash(&self) -> i32 {
        self.root.hash()
    }

    pub fn href(&self) -> Option<&str> {
        self.root.href()
    }

    /// Missing-base reports from sealing, in walk order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of hrefs the seal pass synthesized.
    pub fn synthesized_count(&self) -> usize {
        self.synthesized
    }

    /// Number of composite nodes the seal pass froze.
    pub fn sealed_count(&self) -> usize {
        self.sealed
    }

    /// Every composite node that carries an href, children before parents.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        collect_links(&self.root, &mut String::new(), &mut out);
        out
    }
}

fn collect_links(node: &Node, pointer: &mut String, out: &mut Vec<Link>) {
    let len = pointer.len();
    match node {
        Node::Object(obj) => {
            for (key, child) in obj {
                pointer.push('/');
                pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                collect_links(child, pointer, out);
                pointer.truncate(len);
            }
        }
        Node::Array(arr) => {
            for (index, child) in arr.iter().enumerate() {
                pointer.push('/');
                pointer.push_str(&index.to_string());
                collect_links(child, pointer, out);
                pointer.truncate(len);
            }
        }
        _ => return,
    }

    if let Some(href) = node.href() {
        out.push(Link {
            pointer: pointer.clone(),
            href: href.to_string(),
            synthesized: node.synthesized_href().is_some(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::reader::parse_str;

    #[test]
    fn links_escape_pointer_tokens() {
        let doc = parse_str(
            r#"{"a/b": {"href": "x"}, "t~": [{"href": "y"}]}"#,
            "",
            &ParseConfig::default(),
        )
        .expect("parses");
        let pointers: Vec<_> = doc.links().into_iter().map(|l| l.pointer).collect();
        assert_eq!(pointers, vec!["/a~1b", "/t~0/0"]);
        for link in doc.links() {
            assert!(doc.root().pointer(&link.pointer).is_some());
        }
    }

    #[test]
    fn synthesized_flag() {
        let doc = parse_str(r#"{"href": "/self", "data": {}}"#, "http://h", &ParseConfig::default())
            .expect("parses");
        let links = doc.links();
        assert_eq!(links.len(), 2);
        assert!(links[0].synthesized);
        assert_eq!(links[0].href, "http://h");
        assert!(!links[1].synthesized);
        assert_eq!(doc.synthesized_count(), 1);
    }

    #[test]
    fn sealed_count_covers_every_container() {
        let doc = parse_str(
            r#"{"a": {"b": [1, {"c": []}]}, "n": 1}"#,
            "",
            &ParseConfig::default(),
        )
        .expect("parses");
        assert_eq!(doc.sealed_count(), 5);

        let scalar = parse_str("\"s\"", "", &ParseConfig::default()).expect("parses");
        assert_eq!(scalar.sealed_count(), 0);
    }
}
