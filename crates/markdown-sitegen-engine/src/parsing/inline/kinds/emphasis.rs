/// Bold span type with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// Opens and closes a bold span.
    pub const DELIM: &'static str = "**";
}

/// Italic span type with owned delimiter constant.
///
/// The italic delimiter is a prefix of the bold one, so italic scanning
/// must step over intact `**` runs rather than opening on them.
pub struct Italic;

impl Italic {
    /// Opens and closes an italic span.
    pub const DELIM: &'static str = "*";
    pub const STAR: u8 = b'*';
}
