/// The tag wrapping each list line.
pub const ITEM_TAG: &str = "li";

/// Ordered list block type: lines like `1. item`.
pub struct OrderedList;

impl OrderedList {
    /// Follows the ordinal on each item line.
    pub const MARKER_END: &'static str = ". ";
    pub const TAG: &'static str = "ol";

    /// A block is an ordered list if it opens with one digit and `. `.
    ///
    /// Only the first byte is checked for a digit, so `10. item` does not
    /// open an ordered list.
    pub fn is_list(block: &str) -> bool {
        let bytes = block.as_bytes();
        bytes.first().is_some_and(u8::is_ascii_digit)
            && bytes
                .get(1..)
                .is_some_and(|rest| rest.starts_with(Self::MARKER_END.as_bytes()))
    }

    /// Drops a leading `N. ` marker (any number of digits) and trims.
    ///
    /// A line without a marker is only trimmed.
    pub fn strip_item(line: &str) -> &str {
        let line = line.trim_start();
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        match line[digits..].strip_prefix(Self::MARKER_END) {
            Some(rest) if digits > 0 => rest.trim(),
            _ => line.trim(),
        }
    }
}

/// Unordered list block type: lines like `- item` or `* item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];
    pub const TAG: &'static str = "ul";

    pub fn is_list(block: &str) -> bool {
        Self::MARKERS.iter().any(|m| block.starts_with(*m))
    }

    /// Drops a leading `- ` or `* ` marker and trims.
    ///
    /// A line without a marker is only trimmed.
    pub fn strip_item(line: &str) -> &str {
        let line = line.trim_start();
        Self::MARKERS
            .iter()
            .find_map(|m| line.strip_prefix(*m))
            .unwrap_or(line)
            .trim()
    }
}
