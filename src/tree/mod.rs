//! Uniform syntax tree shape.
//!
//! tree-sitter hands back grammar-specific concrete trees; the rest of the
//! crate works on this normalized shape so the selection logic stays
//! language-agnostic.

use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

/// A normalized syntax tree node.
///
/// `start` and `end` are byte offsets into the source text, with
/// `start <= end`. Children are ordered as they appear in the source and
/// fully owned by their parent. Nodes are built once per parse and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Grammar production name, e.g. `"function_definition"`.
    pub kind: String,
    /// Byte offset of the first byte this node covers.
    pub start: usize,
    /// Byte offset one past the last byte this node covers.
    pub end: usize,
    /// Child nodes, left to right.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Normalize a parsed tree, starting from its root.
    ///
    /// Total over trees produced by the linked grammars; malformed shapes
    /// are not checked for.
    pub fn from_tree(tree: &Tree) -> SyntaxNode {
        Self::from_ts_node(tree.root_node())
    }

    fn from_ts_node(node: Node) -> SyntaxNode {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .map(Self::from_ts_node)
            .collect();

        SyntaxNode {
            kind: node.kind().to_string(),
            start: node.start_byte(),
            end: node.end_byte(),
            children,
        }
    }

    /// Span length in bytes.
    pub fn size(&self) -> usize {
        self.end - self.start
    }

    /// Whether this node's span fully contains `[start, end]`.
    pub fn contains(&self, start: usize, end: usize) -> bool {
        self.start <= start && end <= self.end
    }
}
