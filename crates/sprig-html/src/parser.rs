//! HTML5 Parser implementation
//!
//! Parses with html5ever into an rcdom (through the line-tracking sink)
//! and converts the result into an owned sprig tree.

use std::io::Read;

use html5ever::interface::tree_builder::QuirksMode;
use html5ever::tendril::TendrilSink;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, QualName, local_name, ns, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData};
use sprig_dom::{
    Attribute, Comment, Document, DocumentFragment, DocumentMode, DocumentType, Element, Node,
    SourceLocation, Text,
};

use crate::sink::{LocationSink, Tracked};
use crate::{ParseError, ParseOptions};

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse an HTML string into a `Document` node
    pub fn parse(&self, html: &str) -> Node {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());
        let tracked = parse_document(LocationSink::new(), self.parse_opts()).one(html);
        self.finish(tracked)
    }

    /// Parse UTF-8 HTML from a reader into a `Document` node
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Node, ParseError> {
        tracing::debug!("Parsing HTML document from reader");
        let tracked = parse_document(LocationSink::new(), self.parse_opts())
            .from_utf8()
            .read_from(&mut reader)?;
        Ok(self.finish(tracked))
    }

    /// Parse an HTML snippet into a `DocumentFragment` node.
    ///
    /// The snippet is parsed in the context of a `<template>` element, so
    /// table parts and other context-dependent content are kept as written.
    pub fn parse_fragment(&self, html: &str) -> Node {
        tracing::debug!("Parsing HTML fragment ({} bytes)", html.len());
        let context = QualName::new(None, ns!(html), local_name!("template"));
        let tracked = html5ever::parse_fragment(
            LocationSink::new(),
            self.parse_opts(),
            context,
            Vec::new(),
            false,
        )
        .one(html);

        // The tree builder parents the fragment under a synthetic <html> root
        let child_nodes = tracked
            .dom
            .document
            .children
            .borrow()
            .iter()
            .filter(|root| is_element_named(root, "html"))
            .flat_map(|root| self.convert_children(root, &tracked))
            .collect();

        let fragment = Node::DocumentFragment(DocumentFragment { child_nodes });
        tracing::debug!(
            "Parsed fragment: {} nodes, {} parse errors",
            fragment.subtree_len(),
            tracked.error_count
        );
        fragment
    }

    fn parse_opts(&self) -> ParseOpts {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: self.options.exact_errors,
                ..Default::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: self.options.exact_errors,
                scripting_enabled: self.options.scripting_enabled,
                ..Default::default()
            },
        }
    }

    fn finish(&self, tracked: Tracked) -> Node {
        let document = Node::Document(Document {
            mode: document_mode(tracked.quirks_mode),
            child_nodes: self.convert_children(&tracked.dom.document, &tracked),
        });

        tracing::debug!(
            "Parsed {} nodes ({} located), {} parse errors",
            document.subtree_len(),
            tracked.locations.len(),
            tracked.error_count
        );
        document
    }

    fn convert_children(&self, handle: &Handle, tracked: &Tracked) -> Vec<Node> {
        let mut children: Vec<Node> = handle
            .children
            .borrow()
            .iter()
            .filter_map(|child| self.convert_node(child, tracked))
            .collect();

        // Template contents live in a separate rcdom node; flatten them
        if let RcNodeData::Element {
            template_contents, ..
        } = &handle.data
        {
            if let Some(contents) = template_contents.borrow().as_ref() {
                children.extend(self.convert_children(contents, tracked));
            }
        }
        children
    }

    /// Convert an RcDom node to our tree format
    fn convert_node(&self, handle: &Handle, tracked: &Tracked) -> Option<Node> {
        let location = self.location(handle, tracked);

        match &handle.data {
            RcNodeData::Document => Some(Node::Document(Document {
                mode: document_mode(tracked.quirks_mode),
                child_nodes: self.convert_children(handle, tracked),
            })),
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => Some(Node::DocumentType(DocumentType {
                name: name.to_string(),
                public_id: public_id.to_string(),
                system_id: system_id.to_string(),
            })),
            RcNodeData::Text { contents } => Some(Node::Text(Text {
                value: contents.borrow().to_string(),
                source_code_location: location,
            })),
            RcNodeData::Comment { contents } => Some(Node::Comment(Comment {
                data: contents.to_string(),
                source_code_location: location,
            })),
            RcNodeData::Element { name, attrs, .. } => {
                let attrs = attrs
                    .borrow()
                    .iter()
                    .map(|attr| Attribute {
                        name: attr.name.local.to_string(),
                        value: attr.value.to_string(),
                    })
                    .collect();

                Some(Node::Element(Element {
                    tag_name: name.local.to_string(),
                    namespace: name.ns.to_string(),
                    attrs,
                    child_nodes: self.convert_children(handle, tracked),
                    source_code_location: location,
                }))
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // The HTML tokenizer turns these into comments; nothing to keep
                None
            }
        }
    }

    fn location(&self, handle: &Handle, tracked: &Tracked) -> Option<SourceLocation> {
        if !self.options.source_code_location_info {
            return None;
        }
        tracked.locations.get(handle)
    }
}

fn is_element_named(handle: &Handle, tag: &str) -> bool {
    match &handle.data {
        RcNodeData::Element { name, .. } => &*name.local == tag,
        _ => false,
    }
}

fn document_mode(mode: QuirksMode) -> DocumentMode {
    match mode {
        QuirksMode::Quirks => DocumentMode::Quirks,
        QuirksMode::LimitedQuirks => DocumentMode::LimitedQuirks,
        QuirksMode::NoQuirks => DocumentMode::NoQuirks,
    }
}
