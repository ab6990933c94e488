//! Single-kind visitors
//!
//! One entry point per node kind, each applying only that kind's
//! enter/leave pair. They run on the combined engine with a single slot
//! filled, so running all six in sequence gives the same tree as one
//! traversal with all six pairs installed.

use sprig_dom::{Node, NodeKind};

use crate::{Callback, Hooks, Visitor, traverse};

/// Enter/leave pair for one node kind.
///
/// Unlike [`Visitor`], descending into children is opt-in: by default only
/// the root is visited.
#[derive(Default)]
pub struct KindVisitor<'a> {
    pub on_enter: Option<Callback<'a>>,
    pub on_leave: Option<Callback<'a>>,
    pub visit_child_nodes: bool,
}

impl<'a> KindVisitor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the enter callback
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Builder: set the leave callback
    pub fn on_leave<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_leave = Some(Box::new(f));
        self
    }

    /// Builder: visit every matching descendant, not just the root
    pub fn visit_child_nodes(mut self, visit: bool) -> Self {
        self.visit_child_nodes = visit;
        self
    }
}

/// Apply `visitor` to nodes of `kind`, ignoring every other kind
pub fn visit_kind(kind: NodeKind, node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    let KindVisitor {
        on_enter,
        on_leave,
        visit_child_nodes,
    } = visitor;
    let hooks = Hooks {
        enter: on_enter,
        leave: on_leave,
    };

    let mut visitor = Visitor::new()
        .hooks(kind, hooks)
        .visit_child_nodes(visit_child_nodes);
    traverse(node, &mut visitor)
}

pub fn visit_document(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::Document, node, visitor)
}

pub fn visit_document_fragment(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::DocumentFragment, node, visitor)
}

pub fn visit_document_type(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::DocumentType, node, visitor)
}

pub fn visit_element(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::Element, node, visitor)
}

pub fn visit_comment_node(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::Comment, node, visitor)
}

pub fn visit_text_node(node: Node, visitor: KindVisitor<'_>) -> anyhow::Result<Node> {
    visit_kind(NodeKind::Text, node, visitor)
}
