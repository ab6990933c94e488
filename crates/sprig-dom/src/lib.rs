//! sprig DOM - typed HTML tree
//!
//! Owned, closed tree model for documents produced by an HTML parser,
//! plus the node classification predicates used by the visitor.

mod kind;
mod node;

pub mod is;

pub use kind::NodeKind;
pub use node::{
    Attribute, Comment, Document, DocumentFragment, DocumentMode, DocumentType, Element, Node,
    SourceLocation, Text,
};

/// HTML namespace URL
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
