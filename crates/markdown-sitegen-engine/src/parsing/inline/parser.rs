use super::{
    delimiter::split_delimiter,
    error::InlineError,
    kinds::{Bold, CodeSpan, Italic, SpanKind},
    link::{split_images, split_links},
    types::TextSpan,
};

/// Tokenizes inline text into an ordered sequence of [`TextSpan`]s.
///
/// # Pass Order
/// Bold, italic, code, image, link. Each pass only looks at spans that are
/// still plain. Bold must run before italic because `**` contains `*`, and
/// images before links because `![` contains `[`.
///
/// # Returns
/// Spans covering the whole input in source order. Empty plain fragments
/// at split boundaries are dropped; text with no inline syntax comes back as
/// a single plain span.
///
/// # Errors
/// [`InlineError::UnterminatedSpan`] if a bold, italic or code delimiter is
/// never closed.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, Bold::DELIM, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIM, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::DELIM, SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}
