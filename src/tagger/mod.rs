//! Part-of-speech tagging and named-entity recognition.
//!
//! Both taggers operate on tokenizer output, never on raw text. POS tagging
//! covers every token with exactly one label; entity recognition emits only
//! gazetteer matches.

pub mod gazetteer;
pub mod ner;
pub mod pos;

pub use gazetteer::Gazetteer;
pub use ner::EntityRecognizer;
pub use pos::PosTagger;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// Part-of-speech label, drawn from a fixed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Other,
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PosTag::Noun => "noun",
            PosTag::Verb => "verb",
            PosTag::Adjective => "adjective",
            PosTag::Adverb => "adverb",
            PosTag::Pronoun => "pronoun",
            PosTag::Determiner => "determiner",
            PosTag::Preposition => "preposition",
            PosTag::Conjunction => "conjunction",
            PosTag::Number => "number",
            PosTag::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A token paired with its part-of-speech label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

/// Named-entity category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Person,
    Place,
    Organization,
    Other,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Person => "person",
            EntityType::Place => "place",
            EntityType::Organization => "organization",
            EntityType::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A named entity covering one or more contiguous tokens.
///
/// `start_position..end_position` is the half-open range of token positions
/// the entity spans; the byte offsets cover exactly the underlying token
/// run in the source text. Entities produced for one document never
/// overlap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface form of the entity.
    pub text: String,

    /// Entity category.
    pub entity_type: EntityType,

    /// First token position covered (inclusive).
    pub start_position: usize,

    /// One past the last token position covered.
    pub end_position: usize,

    /// Byte offset of the first covered token.
    pub start_offset: usize,

    /// Byte offset one past the last covered token.
    pub end_offset: usize,
}

impl Entity {
    /// Build an entity from a contiguous run of tokens.
    ///
    /// The surface form joins token texts, inserting a space wherever the
    /// source text had a gap between neighboring tokens.
    pub fn from_tokens(tokens: &[Token], entity_type: EntityType) -> Entity {
        debug_assert!(!tokens.is_empty());

        let mut text = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 && !tokens[i - 1].is_adjacent_to(token) {
                text.push(' ');
            }
            text.push_str(&token.text);
        }

        Entity {
            text,
            entity_type,
            start_position: tokens[0].position,
            end_position: tokens[tokens.len() - 1].position + 1,
            start_offset: tokens[0].start_offset,
            end_offset: tokens[tokens.len() - 1].end_offset,
        }
    }

    /// Number of tokens the entity spans.
    pub fn token_len(&self) -> usize {
        self.end_position - self.start_position
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.entity_type)
    }
}
