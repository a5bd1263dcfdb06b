/// Fenced code block type with owned fence constant.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    pub const OUTER_TAG: &'static str = "pre";
    pub const INNER_TAG: &'static str = "code";

    /// A block is fenced code if it both starts and ends with a fence.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Drops one fence from each end, then trims.
    pub fn strip(block: &str) -> &str {
        let inner = block.strip_prefix(Self::FENCE).unwrap_or(block);
        inner.strip_suffix(Self::FENCE).unwrap_or(inner).trim()
    }
}
