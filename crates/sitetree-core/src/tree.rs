//! Site tree container and build statistics.

use serde::Serialize;

use crate::error::READ_ERROR_PREFIX;
use crate::node::{Node, Walk};

/// Summary statistics for a built tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// Number of folder nodes.
    pub folders: u64,
    /// Number of file nodes.
    pub files: u64,
    /// Files whose content is the read-error sentinel.
    pub unreadable: u64,
    /// Total bytes of embedded content.
    pub content_bytes: u64,
}

impl BuildSummary {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every node of a forest.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut summary = Self::new();
        for node in Walk::forest(nodes) {
            match node.content() {
                Some(content) => summary.record_file(content),
                None => summary.record_folder(),
            }
        }
        summary
    }

    /// Update stats with a file's content.
    pub fn record_file(&mut self, content: &str) {
        self.files += 1;
        self.content_bytes += content.len() as u64;
        if content.starts_with(READ_ERROR_PREFIX) {
            self.unreadable += 1;
        }
    }

    /// Record a folder.
    pub fn record_folder(&mut self) {
        self.folders += 1;
    }
}

/// The value bound by the generated module: `{ "tree": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteTree {
    /// Top-level nodes.
    pub tree: Vec<Node>,
}

impl SiteTree {
    /// Wrap a forest without reordering it.
    pub fn new(tree: Vec<Node>) -> Self {
        Self { tree }
    }

    /// Move the first top-level node named exactly `name` to index 0.
    ///
    /// Every other node keeps its relative order. Returns whether a node
    /// with that name exists.
    pub fn pin_to_front(&mut self, name: &str) -> bool {
        match self.tree.iter().position(|node| node.name == name) {
            Some(0) => true,
            Some(index) => {
                self.tree[..=index].rotate_right(1);
                true
            }
            None => false,
        }
    }

    /// Compute summary statistics.
    pub fn summary(&self) -> BuildSummary {
        BuildSummary::from_nodes(&self.tree)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
