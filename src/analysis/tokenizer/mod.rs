//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is restartable: calling [`tokenize`](Tokenizer::tokenize)
/// again on the same text yields an identical stream. Implementations must
/// be pure functions of the input text.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod script_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use script_word::ScriptWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
