//! sprig - typed traversal over parsed HTML trees
//!
//! Re-exports the tree model, node classifier, HTML front end and
//! visitor in one place.

pub use sprig_dom::{
    Attribute, Comment, Document, DocumentFragment, DocumentMode, DocumentType, Element,
    HTML_NAMESPACE, Node, NodeKind, SourceLocation, Text, is,
};
pub use sprig_html::{HtmlParser, ParseError, ParseOptions, parse, parse_fragment};
pub use sprig_visit::{
    Callback, Hooks, InvalidVisitorError, KindVisitor, Phase, Visitor, VisitorEntry, traverse,
    validate_visitor_methods, visit_comment_node, visit_document, visit_document_fragment,
    visit_document_type, visit_element, visit_kind, visit_text_node,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse `html` with `options` and traverse the result with `visitor`
pub fn parse_and_traverse(
    html: &str,
    options: ParseOptions,
    visitor: &mut Visitor<'_>,
) -> anyhow::Result<Node> {
    let document = HtmlParser::with_options(options).parse(html);
    tracing::debug!("Parsed {} nodes, traversing", document.subtree_len());
    traverse(document, visitor)
}
