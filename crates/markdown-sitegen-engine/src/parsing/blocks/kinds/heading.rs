/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character, repeated once per level.
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;
    /// Prefix of a level-1 heading line, used for title extraction.
    pub const TITLE_PREFIX: &'static str = "# ";

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    ///
    /// `#Title` (no space) and `####### x` (seven markers) are not headings.
    pub fn level(block: &str) -> Option<u8> {
        let bytes = block.as_bytes();
        let hashes = bytes.iter().take_while(|&&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        if bytes.get(hashes) != Some(&b' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Drops the marker run and the space after it, then trims.
    pub fn strip(block: &str, level: u8) -> &str {
        block
            .get(usize::from(level) + 1..)
            .unwrap_or_default()
            .trim()
    }

    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
