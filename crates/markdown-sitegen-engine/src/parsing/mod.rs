//! Markdown to HTML conversion.
//!
//! The pipeline runs segment → classify → assemble → render. Inline spans are
//! tokenized per block by [`inline::tokenize`].

pub mod blocks;
pub mod error;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::html::ParentNode;

use blocks::{Block, BlockBuilder, MarkdownBlockClassifier, kinds::Heading, segment};
pub use error::ParseError;

/// Segments and classifies a document, in source order.
pub fn parse_blocks(markdown: &str) -> Vec<Block<'_>> {
    let classifier = MarkdownBlockClassifier;
    segment(markdown)
        .into_iter()
        .map(|text| classifier.block(text))
        .collect()
}

/// Builds the HTML tree of a document: a root `div` with one child per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode, ParseError> {
    let mut builder = BlockBuilder::new();
    for block in parse_blocks(markdown) {
        builder.push(&block)?;
    }
    Ok(builder.finish())
}

/// Converts a document to HTML text.
///
/// A document with no blocks fails with [`crate::html::HtmlError::EmptyChildren`].
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}

/// Returns the text of the first line starting with `# `, trimmed.
///
/// Lines are scanned as written; a `# ` line inside a code fence still counts.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix(Heading::TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ParseError::NoTitleFound)
}
