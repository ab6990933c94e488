//! Node classification
//!
//! Total, side-effect-free predicates over [`Node`]. Kinds are mutually
//! exclusive: for any node exactly one `is_*` predicate holds.

use crate::{Node, NodeKind};

/// Kind of `node`
#[inline]
pub fn kind_of(node: &Node) -> NodeKind {
    node.kind()
}

/// Whether `node` carries a tag name
#[inline]
pub fn is_element(node: &Node) -> bool {
    node.tag_name().is_some()
}

#[inline]
pub fn is_document(node: &Node) -> bool {
    matches!(node, Node::Document(_))
}

#[inline]
pub fn is_document_fragment(node: &Node) -> bool {
    matches!(node, Node::DocumentFragment(_))
}

#[inline]
pub fn is_document_type(node: &Node) -> bool {
    matches!(node, Node::DocumentType(_))
}

#[inline]
pub fn is_text_node(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}

#[inline]
pub fn is_comment_node(node: &Node) -> bool {
    matches!(node, Node::Comment(_))
}

/// Whether `node` is of a kind that owns a child list.
///
/// Says nothing about whether the list is non-empty.
#[inline]
pub fn has_child_nodes(node: &Node) -> bool {
    is_document(node) || is_document_fragment(node) || is_element(node)
}

/// Whether `node` is of a kind that may have a parent.
///
/// A capability check; it does not look at any actual parent.
#[inline]
pub fn has_parent_node(node: &Node) -> bool {
    !(is_document(node) || is_document_fragment(node) || is_document_type(node))
}

/// Whether the parser recorded a source location for `node`
#[inline]
pub fn has_source_code_location(node: &Node) -> bool {
    node.source_code_location().is_some()
}
