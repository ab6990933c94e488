//! Tree nodes
//!
//! A [`Node`] owns its children outright; there are no back pointers.
//! Parent links are supplied by whoever walks the tree.

use crate::{HTML_NAMESPACE, NodeKind};

/// Tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Document root
    Document(Document),
    /// Fragment root
    DocumentFragment(DocumentFragment),
    /// DOCTYPE
    DocumentType(DocumentType),
    /// Element
    Element(Element),
    /// Comment
    Comment(Comment),
    /// Text content
    Text(Text),
}

impl Node {
    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            source_code_location: None,
        })
    }

    /// Create a comment node
    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment(Comment {
            data: data.into(),
            source_code_location: None,
        })
    }

    /// Create an empty HTML element node
    pub fn element(tag_name: impl Into<String>) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a document fragment holding `child_nodes`
    pub fn fragment(child_nodes: Vec<Node>) -> Self {
        Node::DocumentFragment(DocumentFragment { child_nodes })
    }

    /// Create a document holding `child_nodes`
    pub fn document(child_nodes: Vec<Node>) -> Self {
        Node::Document(Document {
            mode: DocumentMode::default(),
            child_nodes,
        })
    }

    /// Kind of this node
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::DocumentFragment(_) => NodeKind::DocumentFragment,
            Node::DocumentType(_) => NodeKind::DocumentType,
            Node::Element(_) => NodeKind::Element,
            Node::Comment(_) => NodeKind::Comment,
            Node::Text(_) => NodeKind::Text,
        }
    }

    /// The `nodeName`: a `#`-sentinel, or the tag name for elements
    pub fn node_name(&self) -> &str {
        match self {
            Node::Element(e) => &e.tag_name,
            other => other.kind().node_name().unwrap_or_default(),
        }
    }

    /// Tag name, if this is an element
    #[inline]
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag_name.as_str())
    }

    /// Child list, if this kind can have children
    pub fn child_nodes(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Document(d) => Some(&d.child_nodes),
            Node::DocumentFragment(f) => Some(&f.child_nodes),
            Node::Element(e) => Some(&e.child_nodes),
            _ => None,
        }
    }

    /// Mutable child list, if this kind can have children
    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document(d) => Some(&mut d.child_nodes),
            Node::DocumentFragment(f) => Some(&mut f.child_nodes),
            Node::Element(e) => Some(&mut e.child_nodes),
            _ => None,
        }
    }

    /// Source location, if the parser recorded one
    pub fn source_code_location(&self) -> Option<&SourceLocation> {
        match self {
            Node::Element(e) => e.source_code_location.as_ref(),
            Node::Comment(c) => c.source_code_location.as_ref(),
            Node::Text(t) => t.source_code_location.as_ref(),
            _ => None,
        }
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(&t.value),
            _ => None,
        }
    }

    /// Get comment data if this is a comment
    #[inline]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Node::Comment(c) => Some(&c.data),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self
            .child_nodes()
            .map(|children| children.iter().map(Node::subtree_len).sum())
            .unwrap_or(0)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Document-level quirks mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentMode {
    #[default]
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

/// Document root data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub mode: DocumentMode,
    pub child_nodes: Vec<Node>,
}

/// Fragment root data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFragment {
    pub child_nodes: Vec<Node>,
}

/// DOCTYPE data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentType {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

/// Element data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local tag name
    pub tag_name: String,
    /// Namespace URL
    pub namespace: String,
    pub attrs: Vec<Attribute>,
    pub child_nodes: Vec<Node>,
    pub source_code_location: Option<SourceLocation>,
}

impl Element {
    /// Create an empty element in the HTML namespace
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            namespace: HTML_NAMESPACE.to_string(),
            attrs: Vec::new(),
            child_nodes: Vec::new(),
            source_code_location: None,
        }
    }

    /// Builder: replace the children
    pub fn with_children(mut self, child_nodes: Vec<Node>) -> Self {
        self.child_nodes = child_nodes;
        self
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        // Check if attribute already exists
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute { name, value });
    }
}

/// Comment data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub data: String,
    pub source_code_location: Option<SourceLocation>,
}

/// Text node data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub source_code_location: Option<SourceLocation>,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Where a node starts in the source text (1-based line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub start_line: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name() {
        assert_eq!(Node::document(vec![]).node_name(), "#document");
        assert_eq!(Node::fragment(vec![]).node_name(), "#document-fragment");
        assert_eq!(
            Node::DocumentType(DocumentType::default()).node_name(),
            "#documentType"
        );
        assert_eq!(Node::comment("x").node_name(), "#comment");
        assert_eq!(Node::text("x").node_name(), "#text");
        assert_eq!(Node::element("h1").node_name(), "h1");
    }

    #[test]
    fn test_tag_name_only_on_elements() {
        assert_eq!(Node::element("p").tag_name(), Some("p"));
        assert_eq!(Node::text("p").tag_name(), None);
        assert_eq!(Node::document(vec![]).tag_name(), None);
    }

    #[test]
    fn test_child_nodes_capability() {
        assert!(Node::document(vec![]).child_nodes().is_some());
        assert!(Node::fragment(vec![]).child_nodes().is_some());
        assert!(Node::element("div").child_nodes().is_some());
        assert!(Node::text("a").child_nodes().is_none());
        assert!(Node::comment("a").child_nodes().is_none());
        assert!(Node::DocumentType(DocumentType::default()).child_nodes().is_none());
    }

    #[test]
    fn test_set_attr_overwrites() {
        let mut e = Element::new("a");
        e.set_attr("href", "/one");
        e.set_attr("href", "/two");
        assert_eq!(e.attrs.len(), 1);
        assert_eq!(e.attr("href"), Some("/two"));
        assert_eq!(e.attr("title"), None);
    }

    #[test]
    fn test_subtree_len() {
        let tree = Node::fragment(vec![
            Element::new("ul")
                .with_children(vec![
                    Element::new("li").with_children(vec![Node::text("a")]).into(),
                    Element::new("li").into(),
                ])
                .into(),
            Node::comment("end"),
        ]);
        assert_eq!(tree.subtree_len(), 6);
    }
}
