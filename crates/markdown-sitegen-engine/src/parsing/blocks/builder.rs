use crate::html::{HtmlNode, ParentNode};
use crate::parsing::error::ParseError;
use crate::parsing::inline::{InlineError, tokenize};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, ITEM_TAG, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind},
};

/// Tag of the node that holds every block of a document.
pub const ROOT_TAG: &str = "div";

/// Collects converted blocks, in push order, under one root `div`.
pub struct BlockBuilder {
    out: Vec<HtmlNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, block: &Block<'_>) -> Result<(), ParseError> {
        self.out.push(block_to_html_node(block)?.into());
        Ok(())
    }

    pub fn finish(self) -> ParentNode {
        ParentNode::new(ROOT_TAG, self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts one classified block into its HTML node.
///
/// Block syntax is stripped first; the remaining text is tokenized into
/// inline spans that become the node's children. Quotes are tokenized as a
/// whole, list blocks line by line with one `li` per line.
pub fn block_to_html_node(block: &Block<'_>) -> Result<ParentNode, ParseError> {
    let text = block.text;
    let node = match block.kind {
        BlockKind::Paragraph => {
            ParentNode::new(Paragraph::TAG, inline_nodes(Paragraph::strip(text))?)
        }
        BlockKind::Heading { level } => {
            ParentNode::new(Heading::tag(level), inline_nodes(Heading::strip(text, level))?)
        }
        BlockKind::Code => {
            let code = ParentNode::new(
                CodeFence::INNER_TAG,
                inline_nodes(CodeFence::strip(text))?,
            );
            ParentNode::new(CodeFence::OUTER_TAG, [code])
        }
        BlockKind::Quote => {
            ParentNode::new(BlockQuote::TAG, inline_nodes(&BlockQuote::strip(text))?)
        }
        BlockKind::OrderedList => list_node(OrderedList::TAG, text, OrderedList::strip_item)?,
        BlockKind::UnorderedList => {
            list_node(UnorderedList::TAG, text, UnorderedList::strip_item)?
        }
    };
    Ok(node)
}

fn list_node(
    tag: &str,
    text: &str,
    strip_item: fn(&str) -> &str,
) -> Result<ParentNode, ParseError> {
    let items = text
        .split('\n')
        .map(|line| {
            inline_nodes(strip_item(line)).map(|children| ParentNode::new(ITEM_TAG, children))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(tag, items))
}

fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(tokenize(text)?
        .iter()
        .map(|span| span.to_html_node().into())
        .collect())
}
