//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`** / **`Italic`**: `**` and `*`
//! - **`CodeSpan`**: `` ` ``
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)`
//!
//! [`SpanKind`] ties each kind to its opening and closing delimiter. The
//! table is an exhaustive `match`, so adding a kind without delimiters does
//! not compile.

pub mod code_span;
pub mod emphasis;
pub mod link;

use std::fmt;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};

use super::error::InlineError;

/// The semantic kind of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// The delimiter that opens a span of this kind. Empty for plain text.
    pub const fn opening(self) -> &'static str {
        match self {
            SpanKind::Plain => "",
            SpanKind::Bold => Bold::DELIM,
            SpanKind::Italic => Italic::DELIM,
            SpanKind::Code => CodeSpan::DELIM,
            SpanKind::Link => Link::OPEN,
            SpanKind::Image => Image::OPEN,
        }
    }

    /// The delimiter that closes a span of this kind.
    ///
    /// For links and images this closes the text part, not the URL.
    pub const fn closing(self) -> &'static str {
        match self {
            SpanKind::Plain => "",
            SpanKind::Bold => Bold::DELIM,
            SpanKind::Italic => Italic::DELIM,
            SpanKind::Code => CodeSpan::DELIM,
            SpanKind::Link => Link::CLOSE,
            SpanKind::Image => Image::CLOSE,
        }
    }

    /// Whether spans of this kind are produced by a symmetric delimiter split.
    pub const fn is_delimited(self) -> bool {
        matches!(self, SpanKind::Bold | SpanKind::Italic | SpanKind::Code)
    }

    /// Checks that `delimiter` is the opening delimiter of this kind.
    pub fn validate_delimiter(self, delimiter: &str) -> Result<(), InlineError> {
        if self.opening() == delimiter {
            Ok(())
        } else {
            Err(InlineError::InvalidDelimiterForKind {
                delimiter: delimiter.to_string(),
                kind: self,
            })
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
