use std::fmt::Write as _;

/// Errors raised while serialising an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}

/// Ordered attribute list. Rendering follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute, replacing the value in place if the name exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders `key="value"` pairs separated by single spaces.
    ///
    /// Returns an empty string when there are no attributes.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{k}=\"{v}\"");
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn render(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A node holding a single text value and no children.
///
/// Without a tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attrs: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A raw text leaf with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A tagged leaf whose value has not been set. Fails to render.
    pub fn empty(tag: Option<String>) -> Self {
        Self {
            tag,
            value: None,
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn render(&self) -> Result<String, HtmlError> {
        let value = self.value.as_deref().ok_or(HtmlError::MissingValue)?;
        match self.tag.as_deref() {
            None => Ok(value.to_string()),
            Some(tag) => Ok(wrap(tag, &self.attrs, value)),
        }
    }
}

/// A node wrapping an ordered list of children.
///
/// Construction accepts any child list; an empty one is rejected at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attrs: Attributes,
}

impl ParentNode {
    pub fn new<C>(tag: impl Into<String>, children: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<HtmlNode>,
    {
        Self {
            tag: Some(tag.into()),
            children: children.into_iter().map(Into::into).collect(),
            attrs: Attributes::new(),
        }
    }

    /// A parent without a tag. Fails to render.
    pub fn untagged(children: Vec<HtmlNode>) -> Self {
        Self {
            tag: None,
            children,
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn render(&self) -> Result<String, HtmlError> {
        let tag = self.tag.as_deref().ok_or(HtmlError::MissingTag)?;
        if self.children.is_empty() {
            return Err(HtmlError::EmptyChildren {
                tag: tag.to_string(),
            });
        }

        let mut inner = String::new();
        for child in &self.children {
            inner.push_str(&child.render()?);
        }
        Ok(wrap(tag, &self.attrs, &inner))
    }
}

fn wrap(tag: &str, attrs: &Attributes, inner: &str) -> String {
    if attrs.is_empty() {
        format!("<{tag}>{inner}</{tag}>")
    } else {
        format!("<{tag} {}>{inner}</{tag}>", attrs.to_html())
    }
}
