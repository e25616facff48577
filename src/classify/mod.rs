//! Keyword-based topic classification.
//!
//! The classifier assigns one coarse category per text by case-insensitive
//! substring matching against per-category keyword sets, evaluated in a
//! fixed priority order. First matching category wins; no match maps to
//! [`Category::Other`].

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{KotoriError, Result};

/// Coarse topic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weather,
    Movie,
    Product,
    Company,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Weather => "weather",
            Category::Movie => "movie",
            Category::Product => "product",
            Category::Company => "company",
            Category::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Default keyword sets, one per category, in priority order.
const DEFAULT_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Weather,
        &[
            "weather", "sunny", "rain", "snow", "forecast", "temperature", "cloudy", "天气",
            "阳光", "下雨", "下雪", "温度",
        ],
    ),
    (
        Category::Movie,
        &[
            "movie", "film", "cinema", "actor", "actress", "director", "电影", "影片", "导演",
        ],
    ),
    (
        Category::Product,
        &[
            "product", "quality", "purchase", "price", "warranty", "产品", "质量", "价格",
        ],
    ),
    (
        Category::Company,
        &[
            "company", "corporation", "enterprise", "startup", "公司", "企业",
        ],
    ),
];

/// A deterministic keyword classifier.
///
/// Keywords are matched as substrings of the whole (lowercased) input, so
/// they hit inside CJK text without any tokenization. Categories are tried
/// in declaration order and the first hit wins, which makes the result
/// independent of keyword order within a category.
///
/// # Examples
///
/// ```
/// use kotori::classify::{Category, CategoryClassifier};
///
/// let classifier = CategoryClassifier::new().unwrap();
/// assert_eq!(
///     classifier.classify("The weather is beautiful today"),
///     Category::Weather
/// );
/// assert_eq!(classifier.classify("nothing to see"), Category::Other);
/// ```
pub struct CategoryClassifier {
    /// (category, lowercased keywords) in priority order.
    table: Vec<(Category, Vec<String>)>,
}

impl CategoryClassifier {
    /// Create a classifier with the built-in keyword sets.
    pub fn new() -> Result<Self> {
        let table = DEFAULT_KEYWORDS
            .iter()
            .map(|&(category, words)| (category, words.iter().map(|w| w.to_string()).collect()))
            .collect();
        Self::from_table(table)
    }

    /// Create a classifier from custom keyword sets in priority order.
    pub fn from_table(table: Vec<(Category, Vec<String>)>) -> Result<Self> {
        if table.is_empty() {
            return Err(KotoriError::resource("category keyword table is empty"));
        }
        for (category, words) in &table {
            if words.is_empty() {
                return Err(KotoriError::resource(format!(
                    "category {category} has no keywords"
                )));
            }
        }

        let table = table
            .into_iter()
            .map(|(category, words)| {
                (
                    category,
                    words.into_iter().map(|w| w.to_lowercase()).collect(),
                )
            })
            .collect();
        Ok(CategoryClassifier { table })
    }

    /// Classify the text. Total, pure, and deterministic.
    pub fn classify(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();

        for (category, words) in &self.table {
            if words.iter().any(|w| lowered.contains(w.as_str())) {
                debug!("classifier: matched {category}");
                return *category;
            }
        }
        Category::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category() {
        let classifier = CategoryClassifier::new().unwrap();
        assert_eq!(classifier.classify("lovely weather"), Category::Weather);
        assert_eq!(classifier.classify("a boring film"), Category::Movie);
        assert_eq!(
            classifier.classify("the product arrived broken"),
            Category::Product
        );
        assert_eq!(
            classifier.classify("the company went public"),
            Category::Company
        );
        assert_eq!(classifier.classify("hello there"), Category::Other);
    }

    #[test]
    fn test_chinese_keywords() {
        let classifier = CategoryClassifier::new().unwrap();
        assert_eq!(classifier.classify("今天天气真好"), Category::Weather);
        assert_eq!(classifier.classify("这部电影太糟糕了"), Category::Movie);
    }

    #[test]
    fn test_priority_order() {
        let classifier = CategoryClassifier::new().unwrap();
        // Both weather and movie keywords present: weather has priority.
        assert_eq!(
            classifier.classify("a movie about the weather"),
            Category::Weather
        );
        // Product before company.
        assert_eq!(
            classifier.classify("the company shipped a product"),
            Category::Product
        );
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = CategoryClassifier::new().unwrap();
        assert_eq!(classifier.classify("WEATHER report"), Category::Weather);
    }

    #[test]
    fn test_empty_input() {
        let classifier = CategoryClassifier::new().unwrap();
        assert_eq!(classifier.classify(""), Category::Other);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(CategoryClassifier::from_table(vec![]).is_err());
        assert!(
            CategoryClassifier::from_table(vec![(Category::Weather, vec![])]).is_err()
        );
    }
}
