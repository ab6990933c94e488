//! Traversal engine
//!
//! Pre-order enter, post-order leave. Each callback's return value
//! replaces the working node, so later callbacks, the child walk and the
//! parent's child list all see the replacement.

use sprig_dom::{Node, NodeKind};

use crate::{Phase, Visitor, validate_visitor_methods};

/// Walk `node` depth-first, applying `visitor`, and return the resulting tree.
///
/// The visitor is validated before any node is visited. Errors returned by
/// callbacks abort the walk and are returned unchanged; the partially
/// transformed tree is dropped with them.
pub fn traverse(node: Node, visitor: &mut Visitor<'_>) -> anyhow::Result<Node> {
    validate_visitor_methods(visitor)?;

    tracing::debug!(root = %node.kind(), "Traversing tree");
    let node = walk(node, None, visitor)?;
    tracing::debug!(root = %node.kind(), "Traversal finished");

    Ok(node)
}

fn walk(
    mut node: Node,
    parent: Option<&Node>,
    visitor: &mut Visitor<'_>,
) -> anyhow::Result<Node> {
    // A callback may return a node of another kind; later kinds in the
    // order are matched against the replacement.
    for kind in NodeKind::ENTER_ORDER {
        node = dispatch(kind, Phase::Enter, node, parent, visitor)?;
    }

    if visitor.descends() {
        node = walk_children(node, visitor)?;
    }

    for kind in NodeKind::LEAVE_ORDER {
        node = dispatch(kind, Phase::Leave, node, parent, visitor)?;
    }

    Ok(node)
}

/// Walk the children of `node` in order, writing each result back into
/// its slot.
///
/// The child being walked is swapped out for an empty text node, so its
/// callbacks see the parent with every sibling in place.
fn walk_children(mut node: Node, visitor: &mut Visitor<'_>) -> anyhow::Result<Node> {
    let len = node.child_nodes().map_or(0, Vec::len);

    for i in 0..len {
        let Some(slot) = child_slot(&mut node, i) else {
            break;
        };
        let child = std::mem::replace(slot, Node::text(String::new()));

        let child = walk(child, Some(&node), visitor)?;

        if let Some(slot) = child_slot(&mut node, i) {
            *slot = child;
        }
    }
    Ok(node)
}

fn child_slot(node: &mut Node, i: usize) -> Option<&mut Node> {
    node.child_nodes_mut().and_then(|children| children.get_mut(i))
}

fn dispatch(
    kind: NodeKind,
    phase: Phase,
    node: Node,
    parent: Option<&Node>,
    visitor: &mut Visitor<'_>,
) -> anyhow::Result<Node> {
    if !kind.matches(&node) {
        return Ok(node);
    }
    let Some(callback) = visitor.callback_mut(kind, phase) else {
        return Ok(node);
    };

    tracing::trace!(%kind, ?phase, name = node.node_name(), "Visiting node");
    let parent = if kind.is_parent_capable() { parent } else { None };
    (*callback)(node, parent)
}
