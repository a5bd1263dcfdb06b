use super::kinds::SpanKind;

/// Errors raised while splitting text into spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("unterminated {kind} span in {text:?}")]
    UnterminatedSpan { kind: SpanKind, text: String },
    #[error("delimiter {delimiter:?} is not valid for {kind} spans")]
    InvalidDelimiterForKind { delimiter: String, kind: SpanKind },
}
