/// Link inline type: `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const CLOSE: &'static str = "]";
    /// Separates the link text from its destination.
    pub const TEXT_END: &'static str = "](";
    pub const URL_END: &'static str = ")";
}

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";
    pub const CLOSE: &'static str = "]";
    /// A `[` preceded by this byte starts an image, never a link.
    pub const BANG: u8 = b'!';
}
