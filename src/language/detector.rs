//! Frequency-based language detector.
//!
//! The detector counts code points per script class and maps the plurality
//! script to a language through a fixed table. It never fails: input with no
//! recognizable script (empty, whitespace, digits only) maps to
//! [`Language::Unknown`].
//!
//! # Examples
//!
//! ```
//! use kotori::language::{Language, LanguageDetector};
//!
//! let detector = LanguageDetector::new();
//! assert_eq!(detector.detect("The weather is beautiful"), Language::English);
//! assert_eq!(detector.detect("今天天气真好"), Language::Chinese);
//! assert_eq!(detector.detect(""), Language::Unknown);
//! ```

use log::trace;

use crate::language::script::Script;
use crate::language::Language;

/// Candidate languages in tie-break order: when two scripts occur equally
/// often, the earlier entry wins.
const CANDIDATES: &[Language] = &[
    Language::Chinese,
    Language::Japanese,
    Language::Korean,
    Language::English,
    Language::Russian,
    Language::Arabic,
];

/// A deterministic, script-frequency language detector.
///
/// Han ideographs are shared between Chinese and Japanese; any kana in the
/// input reassigns Han evidence to Japanese, since kana only occurs in
/// Japanese text.
#[derive(Clone, Debug, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Create a new language detector.
    pub fn new() -> Self {
        LanguageDetector
    }

    /// Detect the dominant language of the input text.
    ///
    /// Deterministic and total: identical input always yields the same
    /// language, and every input (including empty text) yields a value.
    pub fn detect(&self, text: &str) -> Language {
        let mut latin = 0usize;
        let mut han = 0usize;
        let mut kana = 0usize;
        let mut hangul = 0usize;
        let mut cyrillic = 0usize;
        let mut arabic = 0usize;

        for c in text.chars() {
            match Script::of(c) {
                Script::Latin => latin += 1,
                Script::Han => han += 1,
                Script::Hiragana | Script::Katakana => kana += 1,
                Script::Hangul => hangul += 1,
                Script::Cyrillic => cyrillic += 1,
                Script::Arabic => arabic += 1,
                Script::Other => {}
            }
        }

        // Kana is unambiguous evidence for Japanese, and Han ideographs in a
        // kana-bearing text count toward Japanese rather than Chinese.
        let (chinese, japanese) = if kana > 0 {
            (0, han + kana)
        } else {
            (han, 0)
        };

        let scores = [
            (Language::Chinese, chinese),
            (Language::Japanese, japanese),
            (Language::Korean, hangul),
            (Language::English, latin),
            (Language::Russian, cyrillic),
            (Language::Arabic, arabic),
        ];

        let mut best = Language::Unknown;
        let mut best_score = 0usize;
        for candidate in CANDIDATES {
            let score = scores
                .iter()
                .find(|(lang, _)| lang == candidate)
                .map(|(_, s)| *s)
                .unwrap_or(0);
            if score > best_score {
                best = *candidate;
                best_score = score;
            }
        }

        trace!(
            "language detection: latin={latin} han={han} kana={kana} hangul={hangul} -> {best}"
        );

        best
    }
}
