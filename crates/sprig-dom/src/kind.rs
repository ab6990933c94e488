//! Node kinds
//!
//! The six mutually exclusive categories a [`Node`] can belong to, with
//! the fixed orders in which the visitor evaluates them.

use crate::{Node, is};

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Document,
    DocumentFragment,
    DocumentType,
    Element,
    Comment,
    Text,
}

impl NodeKind {
    /// Order in which enter callbacks are evaluated
    pub const ENTER_ORDER: [NodeKind; 6] = [
        NodeKind::Document,
        NodeKind::DocumentFragment,
        NodeKind::DocumentType,
        NodeKind::Element,
        NodeKind::Comment,
        NodeKind::Text,
    ];

    /// Order in which leave callbacks are evaluated (reverse of enter)
    pub const LEAVE_ORDER: [NodeKind; 6] = [
        NodeKind::Text,
        NodeKind::Comment,
        NodeKind::Element,
        NodeKind::DocumentType,
        NodeKind::DocumentFragment,
        NodeKind::Document,
    ];

    /// The `nodeName` sentinel for this kind.
    ///
    /// Elements have no sentinel; their node name is their tag name.
    pub fn node_name(self) -> Option<&'static str> {
        match self {
            NodeKind::Document => Some("#document"),
            NodeKind::DocumentFragment => Some("#document-fragment"),
            NodeKind::DocumentType => Some("#documentType"),
            NodeKind::Element => None,
            NodeKind::Comment => Some("#comment"),
            NodeKind::Text => Some("#text"),
        }
    }

    /// Key under which callbacks for this kind are registered on a visitor
    pub fn visitor_key(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::DocumentFragment => "DocumentFragment",
            NodeKind::DocumentType => "DocumentType",
            NodeKind::Element => "Element",
            NodeKind::Comment => "CommentNode",
            NodeKind::Text => "TextNode",
        }
    }

    /// Look up a kind by its visitor key
    pub fn from_visitor_key(key: &str) -> Option<Self> {
        Self::ENTER_ORDER
            .into_iter()
            .find(|kind| kind.visitor_key() == key)
    }

    /// Position of this kind in [`NodeKind::ENTER_ORDER`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether `node` is of this kind
    #[inline]
    pub fn matches(self, node: &Node) -> bool {
        match self {
            NodeKind::Document => is::is_document(node),
            NodeKind::DocumentFragment => is::is_document_fragment(node),
            NodeKind::DocumentType => is::is_document_type(node),
            NodeKind::Element => is::is_element(node),
            NodeKind::Comment => is::is_comment_node(node),
            NodeKind::Text => is::is_text_node(node),
        }
    }

    /// Whether nodes of this kind own a child list
    pub fn is_children_capable(self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::Element
        )
    }

    /// Whether nodes of this kind may carry a parent link
    pub fn is_parent_capable(self) -> bool {
        !matches!(
            self,
            NodeKind::Document | NodeKind::DocumentFragment | NodeKind::DocumentType
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.visitor_key())
    }
}
