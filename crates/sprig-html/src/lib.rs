//! sprig HTML front end
//!
//! Parses HTML with html5ever and converts the result into an owned
//! [`sprig_dom::Node`] tree, optionally recording source lines.

mod options;
mod parser;
mod sink;

pub use options::ParseOptions;
pub use parser::HtmlParser;

use sprig_dom::Node;

/// Parse an HTML document with default options
pub fn parse(html: &str) -> Node {
    HtmlParser::new().parse(html)
}

/// Parse an HTML fragment with default options
pub fn parse_fragment(html: &str) -> Node {
    HtmlParser::new().parse_fragment(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
