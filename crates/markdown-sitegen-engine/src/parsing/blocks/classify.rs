use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Classifies segmented blocks by their opening syntax.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Returns the [`BlockKind`] of a trimmed block. First matching rule wins:
    ///
    /// 1. heading
    /// 2. fenced code
    /// 3. quote
    /// 4. ordered list
    /// 5. unordered list
    /// 6. paragraph
    pub fn classify(&self, block: &str) -> BlockKind {
        if let Some(level) = Heading::level(block) {
            return BlockKind::Heading { level };
        }
        if CodeFence::is_fenced(block) {
            return BlockKind::Code;
        }
        if BlockQuote::is_quote(block) {
            return BlockKind::Quote;
        }
        if OrderedList::is_list(block) {
            return BlockKind::OrderedList;
        }
        if UnorderedList::is_list(block) {
            return BlockKind::UnorderedList;
        }
        BlockKind::Paragraph
    }

    pub fn block<'a>(&self, text: &'a str) -> Block<'a> {
        Block {
            kind: self.classify(text),
            text,
        }
    }
}
