//! Tree sealing: href synthesis and the final freeze.
//!
//! Runs once on the document root after bottom-up construction. The walk
//! visits every composite node, tracking the path of keys from the root:
//!
//! - A child reached through a transparent key (`collection` or `data` by
//!   default) keeps its parent's path and is *address-bearing*: if it has no
//!   href it is given `base#/<path>`.
//! - Any other child extends the path with its key and is not given an href.
//! - The root is address-bearing with an empty path, so it is given `base`.
//!
//! Existing hrefs are never overwritten. Every visited node is frozen,
//! whether or not it was given an href. When an address-bearing node needs
//! an href and there is no base, a [`Diagnostic`] is recorded and logged;
//! the walk carries on.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::config::ParseConfig;
use crate::node::Node;

/// Non-fatal findings of a seal pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An address-bearing node could not be given an href because neither
    /// the caller nor the root supplied a base address.
    MissingBase {
        /// JSON pointer of the node, transparent keys included; empty for
        /// the root.
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingBase { path } if path.is_empty() => {
                write!(f, "no base address to derive an href for the document root")
            }
            Diagnostic::MissingBase { path } => {
                write!(f, "no base address to derive an href for node at {path}")
            }
        }
    }
}

/// Outcome of [`seal`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SealReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of hrefs synthesized.
    pub synthesized: usize,
    /// Number of composite nodes frozen.
    pub sealed: usize,
}

/// Synthesize missing hrefs below `root` and freeze every composite node.
///
/// An empty `base` means no base address is available.
pub fn seal(root: &mut Node, base: &str, cfg: &ParseConfig) -> SealReport {
    let mut sealer = Sealer {
        base,
        cfg,
        path: Vec::new(),
        location: Vec::new(),
        report: SealReport::default(),
    };
    sealer.visit(root, true);
    sealer.report
}

struct Sealer<'a> {
    base: &'a str,
    cfg: &'a ParseConfig,
    /// Segments of the synthesized href; transparent keys are skipped.
    path: Vec<String>,
    /// Every key from the root to the current node.
    location: Vec<String>,
    report: SealReport,
}

impl Sealer<'_> {
    fn visit(&mut self, node: &mut Node, address_bearing: bool) {
        match node {
            Node::Object(obj) => {
                for (key, child) in obj.entries_mut() {
                    if !child.is_composite() {
                        continue;
                    }
                    self.location.push(key.clone());
                    if self.cfg.is_transparent(key) {
                        self.visit(child, true);
                    } else {
                        self.path.push(key.clone());
                        self.visit(child, false);
                        self.path.pop();
                    }
                    self.location.pop();
                }
            }
            Node::Array(arr) => {
                for (index, child) in arr.items_mut().enumerate() {
                    if !child.is_composite() {
                        continue;
                    }
                    let segment = index.to_string();
                    self.location.push(segment.clone());
                    self.path.push(segment);
                    self.visit(child, false);
                    self.path.pop();
                    self.location.pop();
                }
            }
            _ => return,
        }

        if address_bearing && node.href().is_none() {
            self.assign(node);
        }
        if let Some(meta) = node.meta_mut() {
            meta.freeze();
            self.report.sealed += 1;
        }
    }

    fn assign(&mut self, node: &mut Node) {
        if self.base.is_empty() {
            if self.cfg.diagnostics_enabled {
                let path = pointer(&self.location);
                warn!(path = %path, "seal_missing_base");
                self.report.diagnostics.push(Diagnostic::MissingBase { path });
            }
            return;
        }

        let href = if self.path.is_empty() {
            self.base.to_string()
        } else {
            format!("{}#/{}", self.base, self.path.join("/"))
        };
        if node.meta_mut().is_some_and(|meta| meta.assign_href(href)) {
            self.report.synthesized += 1;
        }
    }
}

/// JSON pointer for a list of keys, escaping `~` and `/`.
fn pointer(location: &[String]) -> String {
    location.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        acc
    })
}
