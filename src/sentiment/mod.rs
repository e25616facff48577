//! Lexicon-based sentiment scoring.
//!
//! The scorer sums the signed weights of matched sentiment-bearing tokens,
//! normalizes by token count, and thresholds the result at zero. It is a
//! total function: every input (including the empty string) produces a
//! polarity.

pub mod lexicon;

pub use lexicon::SentimentLexicon;

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenType};
use crate::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer};
use crate::error::Result;

/// Overall polarity of a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Normalized score above zero
    Positive,
    /// Normalized score below zero
    Negative,
    /// Score of exactly zero, including "no sentiment words matched"
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        write!(f, "{label}")
    }
}

/// A deterministic, lexicon-based sentiment scorer.
///
/// Latin-script tokens are matched case-insensitively against the lexicon.
/// CJK tokens arrive from the tokenizer one ideograph at a time, so
/// multi-character lexicon entries are matched greedily over contiguous
/// runs of adjacent CJK tokens, longest window first.
///
/// # Examples
///
/// ```
/// use kotori::sentiment::{Sentiment, SentimentScorer};
///
/// let scorer = SentimentScorer::new().unwrap();
/// assert_eq!(scorer.score("What a wonderful day"), Sentiment::Positive);
/// assert_eq!(scorer.score("the chair is brown"), Sentiment::Neutral);
/// assert_eq!(scorer.score(""), Sentiment::Neutral);
/// ```
pub struct SentimentScorer {
    lexicon: Arc<SentimentLexicon>,
    tokenizer: ScriptWordTokenizer,
}

impl SentimentScorer {
    /// Create a scorer over the built-in lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Arc::new(SentimentLexicon::default_lexicon()))
    }

    /// Create a scorer over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<SentimentLexicon>) -> Result<Self> {
        Ok(SentimentScorer {
            lexicon,
            tokenizer: ScriptWordTokenizer::new(),
        })
    }

    /// Compute the normalized sentiment score in [-1, 1].
    ///
    /// Zero is returned when the text has no tokens or no lexicon matches.
    pub fn score_value(&self, text: &str) -> f32 {
        // The built-in tokenizer is infallible; an empty stream is the
        // worst case.
        let tokens: Vec<Token> = self
            .tokenizer
            .tokenize(text)
            .map(|stream| stream.collect())
            .unwrap_or_default();

        if tokens.is_empty() {
            return 0.0;
        }

        let mut sum = 0.0f32;
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].token_type == TokenType::Cjk {
                let (weight, consumed) = self.match_cjk_run(&tokens, i);
                sum += weight;
                i += consumed;
            } else {
                if let Some(w) = self.lexicon.weight(&tokens[i].text) {
                    sum += w;
                }
                i += 1;
            }
        }

        let score = sum / tokens.len() as f32;
        debug!("sentiment: sum={sum} tokens={} score={score}", tokens.len());
        score
    }

    /// Score the text and threshold the result into a polarity.
    pub fn score(&self, text: &str) -> Sentiment {
        let score = self.score_value(text);
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Greedy longest match starting at `start` over adjacent CJK tokens.
    ///
    /// Returns the matched weight (0.0 if none) and how many tokens were
    /// consumed (at least 1).
    fn match_cjk_run(&self, tokens: &[Token], start: usize) -> (f32, usize) {
        let max_window = self.lexicon.max_cjk_chars().min(tokens.len() - start);

        for window in (1..=max_window).rev() {
            let run = &tokens[start..start + window];
            if !is_contiguous_cjk(run) {
                continue;
            }
            let joined: String = run.iter().map(|t| t.text.as_str()).collect();
            if let Some(w) = self.lexicon.weight(&joined) {
                return (w, window);
            }
        }
        (0.0, 1)
    }
}

/// Whether the tokens are all CJK and byte-adjacent in the source text.
fn is_contiguous_cjk(tokens: &[Token]) -> bool {
    if tokens.iter().any(|t| t.token_type != TokenType::Cjk) {
        return false;
    }
    tokens.windows(2).all(|pair| pair[0].is_adjacent_to(&pair[1]))
}
