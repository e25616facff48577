//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, position, and offsets
//! - [`TokenType`] - Classification of token content (alphanumeric, CJK, etc.)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! Creating a token with offsets:
//!
//! ```
//! use kotori::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// This is the fundamental unit that flows through the analysis pipeline.
/// Offsets are half-open byte ranges into the original text, so
/// `&text[token.start_offset..token.end_offset]` always equals `token.text`.
/// Tokens produced for one document are non-overlapping and ordered by
/// start offset.
///
/// # Examples
///
/// ```
/// use kotori::analysis::token::Token;
///
/// let token = Token::new("search", 0);
/// assert_eq!(token.text, "search");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Script-based classification of the token content
    pub token_type: TokenType,
}

/// Token type classification for different kinds of tokens.
///
/// This enum is used to classify tokens by their content script, which drives
/// language-specific processing downstream (per-character CJK segmentation,
/// lexicon selection, closed-class table selection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK ideographs (Chinese, Japanese kanji)
    Cjk,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hangul characters (Korean)
    Hangul,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: 0,
            token_type,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset,
            end_offset,
            token_type,
        }
    }

    /// Override the detected token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether this token is adjacent to `next` (no gap between the
    /// byte ranges).
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.end_offset == next.start_offset
    }
}

impl TokenType {
    /// Detect the token type from the token text.
    ///
    /// Classification order:
    /// - All numeric → Num
    /// - All Hiragana → Hiragana
    /// - All Katakana → Katakana
    /// - Contains Hangul → Hangul
    /// - Contains CJK ideographs → Cjk
    /// - ASCII alphanumeric → Alphanum
    /// - All punctuation → Punctuation
    /// - Otherwise → Other
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(is_cjk_ideograph) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '\'')
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        // Non-ASCII letters (accented Latin, Cyrillic, Greek, ...) still count
        // as word content.
        if word.chars().all(|c| c.is_alphanumeric()) {
            return TokenType::Alphanum;
        }

        TokenType::Other
    }
}

/// Check whether a code point is a CJK unified ideograph.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
    )
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.token_type, TokenType::Alphanum);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_token_type_detection() {
        assert_eq!(TokenType::detect("hello"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("42"), TokenType::Num);
        assert_eq!(TokenType::detect("天"), TokenType::Cjk);
        assert_eq!(TokenType::detect("かな"), TokenType::Hiragana);
        assert_eq!(TokenType::detect("カナ"), TokenType::Katakana);
        assert_eq!(TokenType::detect("한"), TokenType::Hangul);
        assert_eq!(TokenType::detect(","), TokenType::Punctuation);
        assert_eq!(TokenType::detect("café"), TokenType::Alphanum);
        assert_eq!(TokenType::detect(""), TokenType::Other);
    }

    #[test]
    fn test_token_adjacency() {
        let a = Token::with_offsets("苹", 0, 0, 3);
        let b = Token::with_offsets("果", 1, 3, 6);
        assert!(a.is_adjacent_to(&b));
        assert!(!b.is_adjacent_to(&a));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
