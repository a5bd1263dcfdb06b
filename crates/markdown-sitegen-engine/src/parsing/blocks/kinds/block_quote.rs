/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const TAG: &'static str = "blockquote";

    pub fn is_quote(block: &str) -> bool {
        block.starts_with(Self::PREFIX)
    }

    /// Drops one leading `>` from every line and trims each line.
    ///
    /// Lines are rejoined with `\n`, so the quote keeps its line breaks.
    pub fn strip(block: &str) -> String {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line).trim())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
