//! Repository links found in a document

/// A `[title](url)` link pointing at a repository
///
/// `span` is the verbatim matched text and is used as the substitution key
/// when the document is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// The full matched text, e.g. `[Foo](https://github.com/o/foo)`
    pub span: String,
    /// The link title, between the brackets
    pub title: String,
    /// The repository URL, between the parentheses
    pub url: String,
}

impl LinkMatch {
    /// Create a new link match
    #[must_use]
    pub fn new(span: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            span: span.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}
