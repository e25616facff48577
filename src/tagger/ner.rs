//! Gazetteer-based named-entity recognition.
//!
//! The recognizer scans the token sequence left to right and matches
//! contiguous token runs against the gazetteer, longest candidate first.
//! Tokens no name matches produce no entity, so the output is a (possibly
//! empty) subset of the token spans; matched spans never overlap.

use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::error::Result;
use crate::tagger::gazetteer::Gazetteer;
use crate::tagger::Entity;

/// A deterministic gazetteer-driven entity recognizer.
///
/// # Examples
///
/// ```
/// use kotori::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer};
/// use kotori::tagger::{EntityRecognizer, EntityType};
///
/// let tokens: Vec<_> = ScriptWordTokenizer::new()
///     .tokenize("He visited Beijing last year")
///     .unwrap()
///     .collect();
///
/// let recognizer = EntityRecognizer::new().unwrap();
/// let entities = recognizer.tag_entities(&tokens);
/// assert_eq!(entities.len(), 1);
/// assert_eq!(entities[0].text, "Beijing");
/// assert_eq!(entities[0].entity_type, EntityType::Place);
/// ```
pub struct EntityRecognizer {
    gazetteer: Arc<Gazetteer>,
}

impl EntityRecognizer {
    /// Create a recognizer over the built-in gazetteer.
    pub fn new() -> Result<Self> {
        Ok(EntityRecognizer {
            gazetteer: Arc::new(Gazetteer::default_gazetteer()),
        })
    }

    /// Create a recognizer over a custom gazetteer.
    pub fn with_gazetteer(gazetteer: Arc<Gazetteer>) -> Result<Self> {
        Ok(EntityRecognizer { gazetteer })
    }

    /// Find all gazetteer matches in the token sequence.
    ///
    /// Pure function of the tokens: output is ordered by start position,
    /// spans align with contiguous token runs, and no two entities overlap
    /// (the scan resumes after each match).
    pub fn tag_entities(&self, tokens: &[Token]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match self.match_at(tokens, i) {
                Some(entity) => {
                    i += entity.token_len();
                    entities.push(entity);
                }
                None => i += 1,
            }
        }

        debug!("ner: {} tokens -> {} entities", tokens.len(), entities.len());
        entities
    }

    /// Try to match a gazetteer name starting at token `start`.
    fn match_at(&self, tokens: &[Token], start: usize) -> Option<Entity> {
        let first = tokens[start].text.to_lowercase();
        let remaining = tokens.len() - start;

        for candidate in self.gazetteer.candidates(&first) {
            let len = candidate.tokens.len();
            if len > remaining {
                continue;
            }
            let run = &tokens[start..start + len];
            let matches = run
                .iter()
                .zip(candidate.tokens.iter())
                .all(|(token, expected)| token.text.to_lowercase() == *expected);
            if matches {
                return Some(Entity::from_tokens(run, candidate.entity_type));
            }
        }
        None
    }
}
