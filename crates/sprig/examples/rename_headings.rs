//! Example: demote every heading one level and report where each one was
//!
//! Run with `RUST_LOG=debug` to see parser and traversal logs.

use sprig::{HtmlParser, Node, NodeKind, ParseOptions, Visitor, traverse};
use tracing_subscriber::EnvFilter;

const PAGE: &str = "<!DOCTYPE html>
<html>
  <body>
    <h1>Title</h1>
    <p>Intro</p>
    <h2>Section</h2>
    <h6>Already smallest</h6>
  </body>
</html>";

fn demote(mut node: Node, _parent: Option<&Node>) -> anyhow::Result<Node> {
    if let Some(element) = node.as_element_mut() {
        let level = element
            .tag_name
            .strip_prefix('h')
            .and_then(|n| n.parse::<u8>().ok());
        if let Some(level @ 1..=5) = level {
            element.tag_name = format!("h{}", level + 1);
        }
    }
    Ok(node)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = ParseOptions::default().with_source_code_location_info(true);
    let parser = HtmlParser::with_options(options);
    let document = parser.parse(PAGE);

    let mut visitor = Visitor::new()
        .element(demote)
        .on_leave(NodeKind::Element, |node, parent| {
            if let (Some(tag), Some(location)) = (node.tag_name(), node.source_code_location()) {
                if tag.starts_with('h') && tag.len() == 2 {
                    println!(
                        "line {}: <{}> under <{}>",
                        location.start_line,
                        tag,
                        parent.map(Node::node_name).unwrap_or("?")
                    );
                }
            }
            Ok(node)
        });

    let document = traverse(document, &mut visitor)?;
    println!("sprig v{}: {} nodes", sprig::VERSION, document.subtree_len());
    Ok(())
}
