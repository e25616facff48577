//! Gazetteers: name lists used for entity matching.
//!
//! A gazetteer stores known person, place, and organization names as
//! normalized token sequences, indexed by first token for fast scanning.
//! Like the sentiment lexicon, it is a versioned data asset: defaults are
//! embedded, custom lists load from JSON at initialization.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{ScriptWordTokenizer, Tokenizer};
use crate::error::{KotoriError, Result};
use crate::tagger::EntityType;

/// Default person names.
const DEFAULT_PERSONS: &[&str] = &[
    "Einstein",
    "Newton",
    "Shakespeare",
    "Obama",
    "Steve Jobs",
    "Tim Cook",
    "孔子",
    "鲁迅",
    "李白",
];

/// Default place names.
const DEFAULT_PLACES: &[&str] = &[
    "Beijing",
    "Shanghai",
    "London",
    "Paris",
    "Tokyo",
    "New York",
    "China",
    "America",
    "北京",
    "上海",
    "中国",
    "美国",
    "东京",
];

/// Default organization names.
const DEFAULT_ORGANIZATIONS: &[&str] = &[
    "Apple",
    "Google",
    "Microsoft",
    "Amazon",
    "United Nations",
    "苹果公司",
    "谷歌",
    "微软",
    "联合国",
];

/// On-disk representation of a gazetteer asset.
#[derive(Debug, Serialize, Deserialize)]
struct GazetteerFile {
    /// Asset format version.
    version: u32,
    #[serde(default)]
    person: Vec<String>,
    #[serde(default)]
    place: Vec<String>,
    #[serde(default)]
    organization: Vec<String>,
}

/// A single gazetteer entry: the normalized token sequence of a name.
#[derive(Clone, Debug)]
pub(crate) struct GazetteerEntry {
    /// Lowercased token texts of the name, in order.
    pub tokens: Vec<String>,
    pub entity_type: EntityType,
}

/// A lookup table of known names for entity matching.
///
/// Names are tokenized with the same script-aware tokenizer the pipeline
/// uses, so a Chinese name like `苹果公司` is stored as four
/// single-character tokens and matches the tokenizer's per-character CJK
/// output. Matching is case-insensitive for Latin script.
///
/// # Examples
///
/// ```
/// use kotori::tagger::Gazetteer;
///
/// let gazetteer = Gazetteer::default_gazetteer();
/// assert!(gazetteer.len() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct Gazetteer {
    /// Entries grouped by their first (normalized) token, longest first.
    index: AHashMap<String, Vec<GazetteerEntry>>,
    entry_count: usize,
    /// Longest entry, in tokens. Bounds the match window.
    max_tokens: usize,
}

impl Gazetteer {
    /// Build a gazetteer from (name, type) pairs.
    ///
    /// Returns an error if the list is empty or a name produces no tokens.
    /// When the same name appears twice, the first occurrence wins.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, EntityType)>,
        S: AsRef<str>,
    {
        let tokenizer = ScriptWordTokenizer::new();
        let mut index: AHashMap<String, Vec<GazetteerEntry>> = AHashMap::new();
        let mut entry_count = 0usize;
        let mut max_tokens = 0usize;

        for (name, entity_type) in names {
            let name = name.as_ref();
            // Gazetteer names pass through the pipeline's own tokenizer so
            // stored sequences line up with analysis-time tokens.
            let tokens: Vec<String> = tokenizer
                .tokenize(name)?
                .map(|t| t.text.to_lowercase())
                .collect();
            if tokens.is_empty() {
                return Err(KotoriError::resource(format!(
                    "gazetteer name {name:?} contains no tokens"
                )));
            }

            let first = tokens[0].clone();
            let bucket = index.entry(first).or_default();
            if bucket.iter().any(|e| e.tokens == tokens) {
                continue;
            }

            max_tokens = max_tokens.max(tokens.len());
            entry_count += 1;
            bucket.push(GazetteerEntry {
                tokens,
                entity_type,
            });
        }

        if entry_count == 0 {
            return Err(KotoriError::resource("gazetteer is empty"));
        }

        // Longest candidate first, so scanning can stop at the first hit.
        for bucket in index.values_mut() {
            bucket.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
        }

        Ok(Gazetteer {
            index,
            entry_count,
            max_tokens,
        })
    }

    /// The built-in person/place/organization lists.
    pub fn default_gazetteer() -> Self {
        let names = DEFAULT_PERSONS
            .iter()
            .map(|&n| (n, EntityType::Person))
            .chain(DEFAULT_PLACES.iter().map(|&n| (n, EntityType::Place)))
            .chain(
                DEFAULT_ORGANIZATIONS
                    .iter()
                    .map(|&n| (n, EntityType::Organization)),
            );
        // The embedded lists satisfy the constructor's invariants.
        Self::from_names(names).expect("default gazetteer is valid")
    }

    /// Load a gazetteer from a versioned JSON asset file.
    ///
    /// The expected shape is
    /// `{"version": 1, "person": [...], "place": [...], "organization": [...]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let asset: GazetteerFile = serde_json::from_reader(BufReader::new(file))?;
        if asset.version != 1 {
            return Err(KotoriError::resource(format!(
                "unsupported gazetteer version: {}",
                asset.version
            )));
        }

        let names = asset
            .person
            .iter()
            .map(|n| (n.as_str(), EntityType::Person))
            .chain(asset.place.iter().map(|n| (n.as_str(), EntityType::Place)))
            .chain(
                asset
                    .organization
                    .iter()
                    .map(|n| (n.as_str(), EntityType::Organization)),
            )
            .collect::<Vec<_>>();
        Self::from_names(names)
    }

    /// Candidate entries whose first token is `first`, longest first.
    pub(crate) fn candidates(&self, first: &str) -> &[GazetteerEntry] {
        self.index.get(first).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of names in the gazetteer.
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Check whether the gazetteer has no names.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Longest name, in tokens.
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::default_gazetteer()
    }
}
