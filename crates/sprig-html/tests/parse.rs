//! Integration tests for sprig-html
//!
//! Tree shape and source locations of parsed documents.

use std::io::Cursor;

use sprig_dom::is::{
    has_source_code_location, is_comment_node, is_document, is_document_fragment,
    is_document_type, is_element, is_text_node,
};
use sprig_dom::{Node, NodeKind};
use sprig_html::{HtmlParser, ParseOptions, parse, parse_fragment};

fn collect<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(node);
    for child in node.child_nodes().into_iter().flatten() {
        collect(child, out);
    }
}

fn descendants(node: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    collect(node, &mut out);
    out
}

const PAGE: &str = "<!DOCTYPE html>
<html>
  <head><title>Test</title></head>
  <body>
    <!-- greeting -->
    <h1>Hello</h1>
    <p>World</p>
  </body>
</html>";

// ============================================================================
// TREE SHAPE
// ============================================================================

#[test]
fn test_document_structure() {
    let doc = parse(PAGE);
    assert!(is_document(&doc));

    let children = doc.child_nodes().unwrap();
    assert!(is_document_type(&children[0]));
    assert_eq!(children[1].tag_name(), Some("html"));
}

#[test]
fn test_every_node_has_exactly_one_kind() {
    let doc = parse(PAGE);
    for node in descendants(&doc) {
        let hits = [
            is_document(node),
            is_document_fragment(node),
            is_document_type(node),
            is_element(node),
            is_comment_node(node),
            is_text_node(node),
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn test_parser_inserts_head() {
    let doc = parse("<html><body><h1>A</h1><p>B</p></body></html>");
    let tags: Vec<_> = descendants(&doc)
        .into_iter()
        .filter_map(Node::tag_name)
        .collect();
    assert_eq!(tags, vec!["html", "head", "body", "h1", "p"]);
}

#[test]
fn test_whitespace_text_is_kept() {
    let doc = parse(PAGE);
    let texts = descendants(&doc)
        .into_iter()
        .filter(|n| n.kind() == NodeKind::Text)
        .count();
    assert!(texts > 3, "expected whitespace runs to be kept, got {}", texts);
}

#[test]
fn test_comment_is_kept() {
    let doc = parse(PAGE);
    let comment = descendants(&doc)
        .into_iter()
        .find_map(Node::as_comment)
        .unwrap();
    assert_eq!(comment, " greeting ");
}

#[test]
fn test_attributes_and_namespace() {
    let doc = parse(r#"<a href="/x" class="nav">x</a><svg><circle r="1"/></svg>"#);
    let all = descendants(&doc);

    let a = all.iter().find_map(|n| n.as_element().filter(|e| e.tag_name == "a")).unwrap();
    assert_eq!(a.attr("href"), Some("/x"));
    assert_eq!(a.attr("class"), Some("nav"));
    assert_eq!(a.namespace, sprig_dom::HTML_NAMESPACE);

    let circle = all
        .iter()
        .find_map(|n| n.as_element().filter(|e| e.tag_name == "circle"))
        .unwrap();
    assert_eq!(circle.namespace, "http://www.w3.org/2000/svg");
}

#[test]
fn test_fragment() {
    let fragment = parse_fragment("<h1>A</h1><!-- c -->text");
    assert!(is_document_fragment(&fragment));

    let kinds: Vec<_> = fragment
        .child_nodes()
        .unwrap()
        .iter()
        .map(Node::kind)
        .collect();
    assert_eq!(kinds, vec![NodeKind::Element, NodeKind::Comment, NodeKind::Text]);
}

#[test]
fn test_parse_reader() {
    let doc = HtmlParser::new()
        .parse_reader(Cursor::new(PAGE.as_bytes()))
        .unwrap();
    assert_eq!(doc, parse(PAGE));
}

#[test]
fn test_parse_empty() {
    let doc = parse("");
    // html, head and body are always created
    assert_eq!(doc.subtree_len(), 4);
}

// ============================================================================
// SOURCE LOCATIONS
// ============================================================================

#[test]
fn test_no_locations_by_default() {
    let doc = parse(PAGE);
    assert!(descendants(&doc).into_iter().all(|n| !has_source_code_location(n)));
}

#[test]
fn test_locations_when_requested() {
    let options = ParseOptions::default().with_source_code_location_info(true);
    let doc = HtmlParser::with_options(options).parse(PAGE);

    for node in descendants(&doc) {
        match node.kind() {
            NodeKind::Element | NodeKind::Text | NodeKind::Comment => {
                assert!(has_source_code_location(node), "{} has no location", node.node_name())
            }
            _ => assert!(!has_source_code_location(node)),
        }
    }
}

#[test]
fn test_location_lines() {
    let options = ParseOptions::default().with_source_code_location_info(true);
    let doc = HtmlParser::with_options(options).parse(PAGE);
    let all = descendants(&doc);

    let line_of = |tag: &str| {
        all.iter()
            .find(|n| n.tag_name() == Some(tag))
            .and_then(|n| n.source_code_location())
            .map(|l| l.start_line)
    };
    assert_eq!(line_of("title"), Some(3));
    assert_eq!(line_of("h1"), Some(6));
    assert_eq!(line_of("p"), Some(7));

    let comment = all.iter().find(|n| n.kind() == NodeKind::Comment).unwrap();
    assert_eq!(comment.source_code_location().map(|l| l.start_line), Some(5));
}

#[test]
fn test_fragment_locations() {
    let options = ParseOptions::default().with_source_code_location_info(true);
    let fragment = HtmlParser::with_options(options).parse_fragment("<p>a</p>\n<p>b</p>");
    let lines: Vec<_> = fragment
        .child_nodes()
        .unwrap()
        .iter()
        .filter(|n| n.kind() == NodeKind::Element)
        .filter_map(|n| n.source_code_location().map(|l| l.start_line))
        .collect();
    assert_eq!(lines, vec![1, 2]);
}
