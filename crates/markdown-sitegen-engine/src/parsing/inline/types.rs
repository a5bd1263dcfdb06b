use crate::html::LeafNode;

use super::kinds::SpanKind;

/// A run of inline text tagged with one semantic kind.
///
/// `url` is only set for links and images. Equality compares `text` and
/// `kind` and ignores `url`.
#[derive(Debug, Clone, Eq)]
pub struct TextSpan {
    /// Span content, or alt text for images.
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl PartialEq for TextSpan {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.kind == other.kind
    }
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Appends `text` as a plain span unless it is empty.
    pub(super) fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
        if !text.is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    /// Converts this span into the leaf node that renders it.
    pub fn to_html_node(&self) -> LeafNode {
        let url = self.url.clone().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => LeafNode::text(self.text.clone()),
            SpanKind::Bold => LeafNode::new("b", self.text.clone()),
            SpanKind::Italic => LeafNode::new("i", self.text.clone()),
            SpanKind::Code => LeafNode::new("code", self.text.clone()),
            SpanKind::Link => LeafNode::new("a", self.text.clone()).with_attr("href", url),
            SpanKind::Image => LeafNode::new("img", "")
                .with_attr("src", url)
                .with_attr("alt", self.text.clone()),
        }
    }
}
