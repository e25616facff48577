//! Script-aware word tokenizer implementation.
//!
//! This module provides the default tokenizer for the analysis pipeline. It
//! splits text using Unicode word boundary rules (UAX #29) and then applies
//! script-specific segmentation: Latin-script runs are kept as whole words,
//! while CJK ideographs are emitted as independent single-character tokens,
//! since no dictionary-based segmentation is available.
//!
//! # Examples
//!
//! ```
//! use kotori::analysis::tokenizer::Tokenizer;
//! use kotori::analysis::tokenizer::script_word::ScriptWordTokenizer;
//!
//! let tokenizer = ScriptWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello 世界").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "世");
//! assert_eq!(tokens[2].text, "界");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, is_cjk_ideograph};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries with per-script
/// refinement.
///
/// Segmentation rules:
///
/// - Maximal runs of letter/digit code points form one token (UAX #29).
/// - Each CJK ideograph becomes its own single-character token, even when
///   adjacent to other ideographs.
/// - Punctuation and symbols are excluded by default; with
///   [`with_punctuation`](ScriptWordTokenizer::with_punctuation) each
///   punctuation code point becomes its own token.
/// - Whitespace never produces tokens.
///
/// Mixed-script input (CJK and Latin in the same string) is segmented
/// without dropping characters.
///
/// # Examples
///
/// ```
/// use kotori::analysis::tokenizer::Tokenizer;
/// use kotori::analysis::tokenizer::script_word::ScriptWordTokenizer;
///
/// let tokenizer = ScriptWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("café résumé").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "café");
/// assert_eq!(tokens[1].text, "résumé");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptWordTokenizer {
    include_punctuation: bool,
}

impl ScriptWordTokenizer {
    /// Create a new script-aware word tokenizer that drops punctuation.
    pub fn new() -> Self {
        ScriptWordTokenizer {
            include_punctuation: false,
        }
    }

    /// Emit each punctuation/symbol code point as its own token.
    pub fn with_punctuation(mut self) -> Self {
        self.include_punctuation = true;
        self
    }

    /// Push a word segment, splitting out CJK ideographs one by one.
    fn push_segment(tokens: &mut Vec<Token>, segment: &str, segment_start: usize) {
        if !segment.chars().any(is_cjk_ideograph) {
            let position = tokens.len();
            tokens.push(Token::with_offsets(
                segment,
                position,
                segment_start,
                segment_start + segment.len(),
            ));
            return;
        }

        // Mixed or pure-ideograph segment: ideographs become one token each,
        // anything between them is grouped into runs.
        let mut run_start: Option<usize> = None;
        for (i, c) in segment.char_indices() {
            if is_cjk_ideograph(c) {
                if let Some(start) = run_start.take() {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        &segment[start..i],
                        position,
                        segment_start + start,
                        segment_start + i,
                    ));
                }
                let position = tokens.len();
                tokens.push(Token::with_offsets(
                    c.to_string(),
                    position,
                    segment_start + i,
                    segment_start + i + c.len_utf8(),
                ));
            } else if run_start.is_none() {
                run_start = Some(i);
            }
        }
        if let Some(start) = run_start {
            let position = tokens.len();
            tokens.push(Token::with_offsets(
                &segment[start..],
                position,
                segment_start + start,
                segment_start + segment.len(),
            ));
        }
    }
}

impl Tokenizer for ScriptWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens: Vec<Token> = Vec::new();

        for (segment_start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            if segment.chars().any(char::is_alphanumeric) {
                Self::push_segment(&mut tokens, segment, segment_start);
            } else if self.include_punctuation {
                // Each punctuation/symbol code point stands alone.
                for (i, c) in segment.char_indices() {
                    if c.is_whitespace() {
                        continue;
                    }
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        c.to_string(),
                        position,
                        segment_start + i,
                        segment_start + i + c.len_utf8(),
                    ));
                }
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "script_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_latin_words() {
        let tokenizer = ScriptWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_cjk_per_character() {
        let tokenizer = ScriptWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("苹果公司").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["苹", "果", "公", "司"]);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Cjk));
        // Byte ranges tile the input with no gaps.
        for pair in tokens.windows(2) {
            assert!(pair[0].is_adjacent_to(&pair[1]));
        }
    }

    #[test]
    fn test_mixed_script() {
        let tokenizer = ScriptWordTokenizer::new();
        let text = "苹果公司CEO今天访问了Beijing";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"CEO"));
        assert!(texts.contains(&"Beijing"));
        assert!(texts.contains(&"苹"));
        assert!(texts.contains(&"访"));

        // No character loss: covered byte ranges reassemble the input.
        let covered: String = tokens
            .iter()
            .map(|t| &text[t.start_offset..t.end_offset])
            .collect();
        assert_eq!(covered, text);
    }

    #[test]
    fn test_offsets_with_repeated_words() {
        let tokenizer = ScriptWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ha ha ha").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[2].start_offset, 6);
    }

    #[test]
    fn test_punctuation_config() {
        let tokenizer = ScriptWordTokenizer::new().with_punctuation();
        let tokens: Vec<Token> = tokenizer.tokenize("yes!!").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["yes", "!", "!"]);
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let tokenizer = ScriptWordTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("   \t\n  ").unwrap().count(), 0);
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = ScriptWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("天气真好 today").unwrap().collect();

        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(ScriptWordTokenizer::new().name(), "script_word");
    }
}
