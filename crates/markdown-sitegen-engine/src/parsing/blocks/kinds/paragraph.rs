/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";

    pub fn strip(block: &str) -> &str {
        block.trim()
    }
}
