/// Separates blocks. Longer runs of newlines leave only whitespace between
/// separators, which is trimmed away.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits markdown into trimmed, non-empty blocks in source order.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
