use super::{
    cursor::Cursor,
    error::InlineError,
    kinds::{Bold, Italic, SpanKind},
    types::TextSpan,
};

/// Splits every plain span in `spans` on a symmetric delimiter.
///
/// Each span is scanned left to right: the first opening delimiter, the
/// closing delimiter after it, and then the same again on the remainder.
/// Text between a pair becomes a span of `kind`; text outside stays plain.
/// Spans that are not plain, or that do not contain `delimiter`, pass
/// through unchanged.
///
/// # Errors
/// - [`InlineError::InvalidDelimiterForKind`] if `delimiter` is not the
///   delimiter of `kind`, or `kind` is not split by delimiters at all
/// - [`InlineError::UnterminatedSpan`] if an opening delimiter has no close
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    kind.validate_delimiter(delimiter)?;
    if !kind.is_delimited() {
        return Err(InlineError::InvalidDelimiterForKind {
            delimiter: delimiter.to_string(),
            kind,
        });
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() && span.text.contains(delimiter) {
            split_plain(&span.text, kind, &mut out)?;
        } else {
            out.push(span);
        }
    }
    Ok(out)
}

fn split_plain(text: &str, kind: SpanKind, out: &mut Vec<TextSpan>) -> Result<(), InlineError> {
    let open = kind.opening();
    let close = kind.closing();
    let mut cur = Cursor::new(text, 0);
    let mut plain_start = 0;

    while let Some(open_at) = find_opening(&mut cur, kind) {
        cur.bump_n(open.len());
        let inner_start = cur.pos();
        let Some(close_at) = cur.seek(close) else {
            return Err(InlineError::UnterminatedSpan {
                kind,
                text: text[open_at..].to_string(),
            });
        };

        TextSpan::push_plain(out, &text[plain_start..open_at]);
        out.push(TextSpan::new(&text[inner_start..close_at], kind));
        cur.bump_n(close.len());
        plain_start = cur.pos();
    }

    TextSpan::push_plain(out, &text[plain_start..]);
    Ok(())
}

/// Moves the cursor to the next opening delimiter of `kind`.
///
/// For italics, a `*` directly followed by another `*` belongs to a bold
/// run; the run and its closing `**` are stepped over intact. An unclosed
/// bold run ends the search.
fn find_opening(cur: &mut Cursor<'_>, kind: SpanKind) -> Option<usize> {
    if kind != SpanKind::Italic {
        return cur.seek(kind.opening());
    }

    loop {
        let at = cur.seek(Italic::DELIM)?;
        if cur.peek_nth(1) != Some(Italic::STAR) {
            return Some(at);
        }
        cur.bump_n(Bold::DELIM.len());
        cur.seek(Bold::DELIM)?;
        cur.bump_n(Bold::DELIM.len());
    }
}
