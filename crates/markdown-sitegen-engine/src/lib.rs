pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
pub use io::*;
pub use parsing::{
    ParseError, extract_title, inline::TextSpan, markdown_to_html, markdown_to_html_node,
};
