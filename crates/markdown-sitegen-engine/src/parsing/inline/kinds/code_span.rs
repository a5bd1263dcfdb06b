/// Code span inline type with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIM: &'static str = "`";
}
