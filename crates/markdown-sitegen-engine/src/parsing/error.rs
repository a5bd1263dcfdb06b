use crate::html::HtmlError;

use super::inline::InlineError;

/// Errors raised while converting markdown to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error("no level-1 heading found")]
    NoTitleFound,
}
