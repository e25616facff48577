//! Document module.
//!
//! A [`Document`] is the immutable wrapper around one raw input text. Every
//! pipeline stage reads the same document; none mutates it. Tokens reference
//! the document through byte offsets.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// An immutable wrapper over one raw input text.
///
/// Constructed once per analysis request and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use kotori::document::Document;
///
/// let doc = Document::new("The weather is beautiful today");
/// assert_eq!(doc.text(), "The weather is beautiful today");
/// assert!(!doc.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a new document from the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document { text: text.into() }
    }

    /// Get the raw text of this document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the length of the document text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the document text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the slice of the document text covered by a token.
    ///
    /// Returns `None` if the token's byte range does not fall on character
    /// boundaries of this document.
    pub fn slice(&self, token: &Token) -> Option<&str> {
        self.text.get(token.start_offset..token.end_offset)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document { text }
    }
}
