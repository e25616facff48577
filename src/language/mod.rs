//! Language identification for Kotori.
//!
//! This module provides script classification of code points and a
//! frequency-based language detector built on top of it.

pub mod detector;
pub mod script;

pub use detector::LanguageDetector;
pub use script::Script;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the detector can identify.
///
/// The supported set is a fixed table keyed by dominant script. `Unknown`
/// is the sentinel for empty input or input without a recognizable script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Chinese (Han ideographs without kana)
    #[serde(rename = "zh")]
    Chinese,
    /// Japanese (kana, or Han ideographs mixed with kana)
    #[serde(rename = "ja")]
    Japanese,
    /// Korean (Hangul)
    #[serde(rename = "ko")]
    Korean,
    /// English (Latin script)
    #[serde(rename = "en")]
    English,
    /// Russian (Cyrillic script)
    #[serde(rename = "ru")]
    Russian,
    /// Arabic (Arabic script)
    #[serde(rename = "ar")]
    Arabic,
    /// No recognizable script
    #[serde(rename = "unknown")]
    Unknown,
}

impl Language {
    /// The primary language-subtag code, as the presentation layer shows it.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::English => "en",
            Language::Russian => "ru",
            Language::Arabic => "ar",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
