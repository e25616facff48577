//! Built-in sample texts.
//!
//! These are the demo strings a presentation layer can offer alongside free
//! input. They cover both supported lexicon languages and all sentiment
//! polarities.

/// Sample texts for demos and smoke tests.
pub const SAMPLE_TEXTS: &[&str] = &[
    "今天天气真好，阳光明媚，让人心情愉悦！",
    "这部电影太糟糕了，浪费了我两个小时的时间。",
    "The weather is beautiful today, and I'm feeling great!",
    "This product exceeded my expectations. I'm very satisfied with the quality.",
];

/// Get the built-in sample texts.
pub fn samples() -> &'static [&'static str] {
    SAMPLE_TEXTS
}
