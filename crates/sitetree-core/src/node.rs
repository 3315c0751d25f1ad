//! File and folder node types.

use std::fmt;

use compact_str::CompactString;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::content_type::ContentType;
use crate::labels;

/// Identifier derived from a node's relative path.
///
/// Path separators become `_` and any other character outside
/// `[A-Za-z0-9_-]` becomes `-`, so the id is safe as a DOM key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct NodeId(CompactString);

impl NodeId {
    /// Derive the id for a `/`-separated relative path.
    pub fn from_path(path: &str) -> Self {
        Self(
            path.chars()
                .map(|c| match c {
                    '/' => '_',
                    c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => c,
                    _ => '-',
                })
                .collect(),
        )
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variant-specific payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Directory with at least one descendant file.
    Folder {
        /// Children in name order.
        children: Vec<Node>,
    },
    /// Regular file with its embedded text.
    File {
        /// Classification from the extension.
        content_type: ContentType,
        /// Full text, or the read-error sentinel.
        content: String,
    },
}

/// A single file or folder in the site tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identifier derived from `path`.
    pub id: NodeId,

    /// Raw entry name.
    pub name: CompactString,

    /// Display name from the label tables.
    pub label: CompactString,

    /// Path relative to the build root, `/`-separated.
    pub path: CompactString,

    /// Folder or file payload.
    pub kind: NodeKind,
}

impl Node {
    /// Create a folder node.
    pub fn folder(name: &str, path: &str, children: Vec<Node>) -> Self {
        Self {
            id: NodeId::from_path(path),
            name: name.into(),
            label: labels::folder_label(name).into(),
            path: path.into(),
            kind: NodeKind::Folder { children },
        }
    }

    /// Create a file node, classifying it by extension.
    pub fn file(name: &str, path: &str, content: String) -> Self {
        Self {
            id: NodeId::from_path(path),
            name: name.into(),
            label: labels::file_label(name).into(),
            path: path.into(),
            kind: NodeKind::File {
                content_type: ContentType::from_file_name(name),
                content,
            },
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Folder { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Embedded text of a file.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content, .. } => Some(content),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Content type of a file.
    pub fn content_type(&self) -> Option<ContentType> {
        match &self.kind {
            NodeKind::File { content_type, .. } => Some(*content_type),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Value of the serialized `type` field.
    pub fn type_tag(&self) -> &'static str {
        match &self.kind {
            NodeKind::Folder { .. } => "folder",
            NodeKind::File { content_type, .. } => content_type.as_str(),
        }
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("type", self.type_tag())?;
        state.serialize_field("path", &self.path)?;
        match &self.kind {
            NodeKind::Folder { children } => state.serialize_field("children", children)?,
            NodeKind::File { content, .. } => state.serialize_field("content", content)?,
        }
        state.end()
    }
}

/// Pre-order traversal returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Walk<'a> {
    /// Walk a whole forest in order.
    pub fn forest(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_from_path() {
        assert_eq!(NodeId::from_path("a/nested.md").as_str(), "a_nested-md");
        assert_eq!(
            NodeId::from_path("01-product/cad/file name (1).md").as_str(),
            "01-product_cad_file-name--1--md"
        );
        assert_eq!(NodeId::from_path("café").as_str(), "caf-");
    }

    #[test]
    fn test_file_node_creation() {
        let node = Node::file("faq.md", "04-website/faq.md", "# FAQ".to_string());
        assert!(node.is_file());
        assert!(!node.is_folder());
        assert_eq!(node.label, "FAQ");
        assert_eq!(node.type_tag(), "md");
        assert_eq!(node.content(), Some("# FAQ"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_folder_node_creation() {
        let child = Node::file("notes.txt", "misc/notes.txt", String::new());
        let node = Node::folder("misc", "misc", vec![child]);
        assert!(node.is_folder());
        assert_eq!(node.label, "misc");
        assert_eq!(node.type_tag(), "folder");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.content(), None);
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = Node::folder(
            "a",
            "a",
            vec![
                Node::folder("b", "a/b", vec![Node::file("c.md", "a/b/c.md", String::new())]),
                Node::file("d.md", "a/d.md", String::new()),
            ],
        );
        let paths: Vec<_> = tree.walk().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["a", "a/b", "a/b/c.md", "a/d.md"]);
    }

    #[test]
    fn test_serialized_field_order() {
        let node = Node::file("app.js", "site/app.js", "let x = 1;".to_string());
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"id":"site_app-js","name":"app.js","label":"JavaScript","type":"js","path":"site/app.js","content":"let x = 1;"}"#
        );

        let folder = Node::folder("site", "site", vec![node]);
        let json = serde_json::to_string(&folder).unwrap();
        assert!(json.starts_with(
            r#"{"id":"site","name":"site","label":"Live Site","type":"folder","path":"site","children":["#
        ));
    }
}
