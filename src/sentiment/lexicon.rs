//! Sentiment lexicon: a table mapping words to signed weights.
//!
//! The default lexicon covers English and Chinese. Chinese entries include
//! both single ideographs and multi-character words; the scorer matches the
//! latter across contiguous single-character tokens. Custom lexicons can be
//! loaded from versioned JSON files at initialization.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{KotoriError, Result};

/// Default English sentiment entries.
const DEFAULT_ENGLISH_ENTRIES: &[(&str, f32)] = &[
    ("good", 0.7),
    ("great", 0.9),
    ("excellent", 1.0),
    ("love", 0.9),
    ("amazing", 1.0),
    ("wonderful", 0.9),
    ("happy", 0.8),
    ("fantastic", 1.0),
    ("awesome", 0.9),
    ("best", 0.9),
    ("beautiful", 0.8),
    ("satisfied", 0.7),
    ("enjoy", 0.7),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.6),
    ("exceeded", 0.5),
    ("bad", -0.7),
    ("terrible", -0.9),
    ("awful", -0.9),
    ("hate", -0.9),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("sad", -0.7),
    ("angry", -0.8),
    ("disappointed", -0.8),
    ("poor", -0.6),
    ("waste", -0.7),
    ("wasted", -0.7),
    ("boring", -0.6),
    ("ugly", -0.6),
    ("annoying", -0.7),
];

/// Default Chinese sentiment entries.
///
/// Multi-character words are matched over contiguous single-character CJK
/// tokens, longest match first.
const DEFAULT_CHINESE_ENTRIES: &[(&str, f32)] = &[
    ("好", 0.6),
    ("美", 0.5),
    ("棒", 0.9),
    ("赞", 0.9),
    ("爱", 0.8),
    ("佳", 0.6),
    ("优", 0.6),
    ("开心", 0.9),
    ("高兴", 0.9),
    ("愉悦", 0.9),
    ("满意", 0.8),
    ("喜欢", 0.8),
    ("漂亮", 0.8),
    ("明媚", 0.7),
    ("精彩", 0.9),
    ("差", -0.7),
    ("糟", -0.8),
    ("烂", -0.9),
    ("坏", -0.7),
    ("恨", -0.8),
    ("糟糕", -0.9),
    ("失望", -0.8),
    ("讨厌", -0.8),
    ("浪费", -0.7),
    ("难过", -0.7),
    ("生气", -0.8),
    ("无聊", -0.6),
];

/// On-disk representation of a lexicon asset.
#[derive(Debug, Serialize, Deserialize)]
struct LexiconFile {
    /// Asset format version.
    version: u32,
    /// Word → signed weight, weights in [-1, 1].
    entries: AHashMap<String, f32>,
}

/// A table mapping sentiment-bearing words to signed weights in [-1, 1].
///
/// Latin-script entries are stored and matched lowercase. The table is
/// read-only after construction; the scorer shares it across threads.
///
/// # Examples
///
/// ```
/// use kotori::sentiment::lexicon::SentimentLexicon;
///
/// let lexicon = SentimentLexicon::default_lexicon();
/// assert!(lexicon.weight("beautiful").is_some());
/// assert!(lexicon.weight("糟糕").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SentimentLexicon {
    entries: AHashMap<String, f32>,
    /// Longest CJK entry, in characters. Bounds the multi-token match window.
    max_cjk_chars: usize,
}

impl SentimentLexicon {
    /// Build a lexicon from word/weight pairs.
    ///
    /// Latin-script words are lowercased. Returns an error if no entries are
    /// given or a weight falls outside [-1, 1].
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut table: AHashMap<String, f32> = AHashMap::new();
        for (word, weight) in entries {
            let word: String = word.into();
            if !(-1.0..=1.0).contains(&weight) {
                return Err(KotoriError::resource(format!(
                    "sentiment weight for {word:?} out of range: {weight}"
                )));
            }
            table.insert(word.to_lowercase(), weight);
        }
        if table.is_empty() {
            return Err(KotoriError::resource("sentiment lexicon is empty"));
        }

        let max_cjk_chars = table
            .keys()
            .filter(|w| w.chars().any(crate::analysis::token::is_cjk_ideograph))
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0);

        Ok(SentimentLexicon {
            entries: table,
            max_cjk_chars,
        })
    }

    /// The built-in English + Chinese lexicon.
    pub fn default_lexicon() -> Self {
        let entries = DEFAULT_ENGLISH_ENTRIES
            .iter()
            .chain(DEFAULT_CHINESE_ENTRIES.iter())
            .map(|&(w, s)| (w, s));
        // The embedded tables satisfy the constructor's invariants.
        Self::from_entries(entries).expect("default sentiment lexicon is valid")
    }

    /// Load a lexicon from a versioned JSON asset file.
    ///
    /// The expected shape is `{"version": 1, "entries": {"word": weight}}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let asset: LexiconFile = serde_json::from_reader(BufReader::new(file))?;
        if asset.version != 1 {
            return Err(KotoriError::resource(format!(
                "unsupported lexicon version: {}",
                asset.version
            )));
        }
        Self::from_entries(asset.entries)
    }

    /// Look up the weight for a word. Latin-script lookups are
    /// case-insensitive.
    pub fn weight(&self, word: &str) -> Option<f32> {
        if let Some(w) = self.entries.get(word) {
            return Some(*w);
        }
        self.entries.get(word.to_lowercase().as_str()).copied()
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest CJK entry in characters (0 when the lexicon has none).
    pub fn max_cjk_chars(&self) -> usize {
        self.max_cjk_chars
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::default_lexicon()
    }
}
