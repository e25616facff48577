//! Script classification of Unicode code points.
//!
//! Classification is range-table based and covers exactly the scripts the
//! language table distinguishes. Everything else falls into [`Script::Other`].

use serde::{Deserialize, Serialize};

use crate::analysis::token::is_cjk_ideograph;

/// Writing-system class of a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// Latin letters, including accented forms
    Latin,
    /// CJK unified ideographs
    Han,
    /// Japanese hiragana
    Hiragana,
    /// Japanese katakana
    Katakana,
    /// Korean hangul
    Hangul,
    /// Cyrillic letters
    Cyrillic,
    /// Arabic letters
    Arabic,
    /// Digits, punctuation, symbols, unclassified letters
    Other,
}

impl Script {
    /// Classify a single code point.
    pub fn of(c: char) -> Script {
        if c.is_ascii_alphabetic() || matches!(c, '\u{00C0}'..='\u{024F}') {
            return Script::Latin;
        }
        if is_cjk_ideograph(c) {
            return Script::Han;
        }
        match c {
            '\u{3040}'..='\u{309F}' => Script::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Script::Katakana,
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => {
                Script::Hangul
            }
            '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}' => Script::Cyrillic,
            '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' => Script::Arabic,
            _ => Script::Other,
        }
    }

    /// Whether this script carries language evidence for the detector.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Script::Other)
    }
}
