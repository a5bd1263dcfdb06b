/// The kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of `#` markers (1-6).
        level: u8,
    },
    /// A block that starts and ends with a ```` ``` ```` fence.
    Code,
    /// Lines starting with `>`.
    Quote,
    /// Lines like `1. item`.
    OrderedList,
    /// Lines like `- item` or `* item`.
    UnorderedList,
    /// Anything else.
    Paragraph,
}

/// A classified block of markdown source.
///
/// Borrowed from the source text; exists only while a document is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Trimmed source text of the block, including its block syntax.
    pub text: &'a str,
}
