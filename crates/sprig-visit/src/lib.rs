//! sprig visit - tree traversal
//!
//! Depth-first enter/leave traversal over [`sprig_dom::Node`] trees.
//! Callbacks receive each node by value and return the node to keep in
//! its place, so a visitor can rename, rewrite or swap whole nodes.
//!
//! ```
//! use sprig_dom::Node;
//! use sprig_visit::{traverse, Visitor};
//!
//! let tree = Node::fragment(vec![Node::element("h1")]);
//! let mut visitor = Visitor::new().element(|mut node, _parent| {
//!     if let Some(e) = node.as_element_mut() {
//!         e.tag_name = "h2".into();
//!     }
//!     Ok(node)
//! });
//!
//! let tree = traverse(tree, &mut visitor).unwrap();
//! assert_eq!(tree.child_nodes().unwrap()[0].tag_name(), Some("h2"));
//! ```

mod error;
mod kind_visitors;
mod traverse;
mod visitor;

pub use error::InvalidVisitorError;
pub use kind_visitors::{
    KindVisitor, visit_comment_node, visit_document, visit_document_fragment, visit_document_type,
    visit_element, visit_kind, visit_text_node,
};
pub use traverse::traverse;
pub use visitor::{Callback, Hooks, Phase, Visitor, VisitorEntry, validate_visitor_methods};
