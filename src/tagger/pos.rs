//! Rule-based part-of-speech tagger.
//!
//! Classification is table- and heuristic-driven: closed-class word lists
//! for determiners, pronouns, prepositions, conjunctions, and auxiliary
//! verbs; a numeric pattern for numbers; suffix and capitalization
//! heuristics for the open classes. Tokens no rule matches are tagged
//! [`PosTag::Other`].

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::token::{Token, TokenType};
use crate::tagger::{PosTag, TaggedToken};

/// English determiners.
static ENGLISH_DETERMINERS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    AHashSet::from_iter([
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
        "either", "neither", "both", "all",
    ])
});

/// English pronouns.
static ENGLISH_PRONOUNS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    AHashSet::from_iter([
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
        "whose", "which", "what", "i'm", "it's",
    ])
});

/// English prepositions.
static ENGLISH_PREPOSITIONS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    AHashSet::from_iter([
        "of", "in", "to", "for", "with", "on", "at", "by", "from", "about", "into", "over",
        "after", "under", "between", "through", "during", "without", "before", "against",
        "among", "within", "along", "across",
    ])
});

/// English conjunctions.
static ENGLISH_CONJUNCTIONS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    AHashSet::from_iter([
        "and", "or", "but", "nor", "so", "yet", "because", "although", "while", "if", "when",
        "than", "whether", "since", "unless",
    ])
});

/// English auxiliary and copular verbs. The open-class verb heuristics
/// never match these, so they get their own table.
static ENGLISH_AUXILIARY_VERBS: LazyLock<AHashSet<&'static str>> = LazyLock::new(|| {
    AHashSet::from_iter([
        "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "can", "could", "shall", "should", "may", "might", "must",
    ])
});

/// Chinese closed-class characters, one table per class. The tokenizer
/// emits CJK ideographs one at a time, so all entries are single
/// characters.
static CHINESE_DETERMINERS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| AHashSet::from_iter(["这", "那", "每", "各", "某"]));

static CHINESE_PRONOUNS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| AHashSet::from_iter(["我", "你", "他", "她", "它", "您", "咱", "谁"]));

static CHINESE_PREPOSITIONS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| AHashSet::from_iter(["在", "从", "对", "向", "于", "把", "被", "给"]));

static CHINESE_CONJUNCTIONS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| AHashSet::from_iter(["和", "与", "或", "但", "而", "及"]));

static CHINESE_COMMON_VERBS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| AHashSet::from_iter(["是", "有", "来", "去", "说", "看", "做", "想"]));

/// Numeric pattern: optional sign, digits with optional grouping/decimal
/// separators, optional percent sign.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+([.,]\d+)*%?$").expect("number pattern is valid")
});

/// A deterministic rule-based POS tagger.
///
/// Every token receives exactly one tag; output order follows token order.
/// Tagging is a pure function of the token sequence.
///
/// # Examples
///
/// ```
/// use kotori::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer};
/// use kotori::tagger::{PosTag, PosTagger};
///
/// let tokenizer = ScriptWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("the beautiful weather").unwrap().collect();
///
/// let tagger = PosTagger::new();
/// let tagged = tagger.tag_pos(&tokens);
/// assert_eq!(tagged[0].tag, PosTag::Determiner);
/// assert_eq!(tagged[1].tag, PosTag::Adjective);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new POS tagger.
    pub fn new() -> Self {
        PosTagger
    }

    /// Assign one part-of-speech label per token, preserving token order.
    pub fn tag_pos(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken {
                token: token.clone(),
                tag: self.tag_token(token),
            })
            .collect()
    }

    /// Classify a single token.
    fn tag_token(&self, token: &Token) -> PosTag {
        match token.token_type {
            TokenType::Num => return PosTag::Number,
            TokenType::Punctuation => return PosTag::Other,
            TokenType::Cjk => return Self::tag_cjk(&token.text),
            TokenType::Hiragana | TokenType::Katakana | TokenType::Hangul => return PosTag::Other,
            TokenType::Alphanum | TokenType::Other => {}
        }

        if NUMBER_PATTERN.is_match(&token.text) {
            return PosTag::Number;
        }

        let lower = token.text.to_lowercase();

        // Closed classes first: they are unambiguous.
        if ENGLISH_DETERMINERS.contains(lower.as_str()) {
            return PosTag::Determiner;
        }
        if ENGLISH_PRONOUNS.contains(lower.as_str()) {
            return PosTag::Pronoun;
        }
        if ENGLISH_PREPOSITIONS.contains(lower.as_str()) {
            return PosTag::Preposition;
        }
        if ENGLISH_CONJUNCTIONS.contains(lower.as_str()) {
            return PosTag::Conjunction;
        }
        if ENGLISH_AUXILIARY_VERBS.contains(lower.as_str()) {
            return PosTag::Verb;
        }

        // Capitalization beats suffix rules, but only past the first token:
        // sentence-initial capitals carry no proper-noun evidence.
        if token.position > 0 && token.text.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::Noun;
        }

        if let Some(tag) = Self::tag_by_suffix(&lower) {
            return tag;
        }

        if token.text.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::Noun;
        }

        PosTag::Other
    }

    /// Suffix heuristics for the open classes. Length guards keep short
    /// words ("red", "bed") from matching.
    fn tag_by_suffix(word: &str) -> Option<PosTag> {
        let n = word.chars().count();

        if n > 3 && word.ends_with("ly") {
            return Some(PosTag::Adverb);
        }

        const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish"];
        if n > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Some(PosTag::Adjective);
        }

        const VERB_SUFFIXES: &[&str] = &["ing", "ize", "ise", "ify"];
        if n > 4 && VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Some(PosTag::Verb);
        }
        if n > 3 && word.ends_with("ed") {
            return Some(PosTag::Verb);
        }

        const NOUN_SUFFIXES: &[&str] = &[
            "tion", "sion", "ment", "ness", "ity", "ist", "ism", "ship", "hood", "er", "or",
        ];
        if n > 4 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Some(PosTag::Noun);
        }

        None
    }

    /// Classify a single CJK ideograph via the Chinese closed-class tables.
    fn tag_cjk(text: &str) -> PosTag {
        if CHINESE_DETERMINERS.contains(text) {
            return PosTag::Determiner;
        }
        if CHINESE_PRONOUNS.contains(text) {
            return PosTag::Pronoun;
        }
        if CHINESE_PREPOSITIONS.contains(text) {
            return PosTag::Preposition;
        }
        if CHINESE_CONJUNCTIONS.contains(text) {
            return PosTag::Conjunction;
        }
        if CHINESE_COMMON_VERBS.contains(text) {
            return PosTag::Verb;
        }
        PosTag::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer};

    fn tag(text: &str) -> Vec<TaggedToken> {
        let tokens: Vec<Token> = ScriptWordTokenizer::new()
            .tokenize(text)
            .unwrap()
            .collect();
        PosTagger::new().tag_pos(&tokens)
    }

    #[test]
    fn test_every_token_gets_one_tag() {
        let tagged = tag("The weather is beautiful today");
        assert_eq!(tagged.len(), 5);
    }

    #[test]
    fn test_closed_classes() {
        let tagged = tag("the cat sat on it and slept");
        assert_eq!(tagged[0].tag, PosTag::Determiner); // the
        assert_eq!(tagged[3].tag, PosTag::Preposition); // on
        assert_eq!(tagged[4].tag, PosTag::Pronoun); // it
        assert_eq!(tagged[5].tag, PosTag::Conjunction); // and
    }

    #[test]
    fn test_weather_sentence() {
        let tagged = tag("The weather is beautiful today");
        // "is" is an auxiliary, "beautiful" matches the -ful suffix.
        assert_eq!(tagged[2].tag, PosTag::Verb);
        assert_eq!(tagged[3].tag, PosTag::Adjective);
    }

    #[test]
    fn test_suffix_heuristics() {
        let tagged = tag("quickly running movement happiness");
        assert_eq!(tagged[0].tag, PosTag::Adverb);
        assert_eq!(tagged[1].tag, PosTag::Verb);
        assert_eq!(tagged[2].tag, PosTag::Noun);
        assert_eq!(tagged[3].tag, PosTag::Noun);
    }

    #[test]
    fn test_numbers() {
        let tagged = tag("42 apples cost 3.50 dollars");
        assert_eq!(tagged[0].tag, PosTag::Number);
        assert_eq!(tagged[3].tag, PosTag::Number);
    }

    #[test]
    fn test_capitalized_word_is_noun() {
        let tagged = tag("visited Beijing yesterday");
        assert_eq!(tagged[1].tag, PosTag::Noun);
    }

    #[test]
    fn test_unmatched_maps_to_other() {
        let tagged = tag("cat");
        assert_eq!(tagged[0].tag, PosTag::Other);
    }

    #[test]
    fn test_chinese_closed_classes() {
        let tagged = tag("我在这");
        assert_eq!(tagged[0].tag, PosTag::Pronoun); // 我
        assert_eq!(tagged[1].tag, PosTag::Preposition); // 在
        assert_eq!(tagged[2].tag, PosTag::Determiner); // 这
    }

    #[test]
    fn test_order_preserved() {
        let tagged = tag("the quick brown fox");
        for (i, t) in tagged.iter().enumerate() {
            assert_eq!(t.token.position, i);
        }
    }

    #[test]
    fn test_pure_function() {
        let tokens: Vec<Token> = ScriptWordTokenizer::new()
            .tokenize("the weather today")
            .unwrap()
            .collect();
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag_pos(&tokens), tagger.tag_pos(&tokens));
    }
}
