//! The immutable analysis result record.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::classify::Category;
use crate::language::Language;
use crate::sentiment::Sentiment;
use crate::tagger::{Entity, TaggedToken};

/// Aggregate result of analyzing one document.
///
/// Produced atomically by
/// [`AnalysisPipeline::analyze`](crate::pipeline::AnalysisPipeline::analyze);
/// no partial result is ever observable. The caller owns the record and
/// simply drops it when a newer analysis supersedes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall polarity of the text.
    pub sentiment: Sentiment,

    /// Dominant language of the text.
    pub language: Language,

    /// Word-level tokens, ordered by start offset.
    pub tokens: Vec<Token>,

    /// Named entities, ordered by start position; empty when nothing matched.
    pub entities: Vec<Entity>,

    /// One part-of-speech tag per token, in token order.
    pub pos_tags: Vec<TaggedToken>,

    /// Coarse topic category.
    pub category: Category,
}

impl AnalysisResult {
    /// Number of tokens in the analyzed text.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Token surface forms, in order. Convenience for presentation layers.
    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_to_json() {
        let result = AnalysisResult {
            sentiment: Sentiment::Neutral,
            language: Language::Unknown,
            tokens: vec![],
            entities: vec![],
            pos_tags: vec![],
            category: Category::Other,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"sentiment\":\"neutral\""));
        assert!(json.contains("\"language\":\"unknown\""));
        assert!(json.contains("\"category\":\"other\""));

        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
