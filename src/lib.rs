//! # Kotori
//!
//! A fast, self-contained text analysis pipeline for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation, no external models or services
//! - Script-aware tokenization with mixed CJK/Latin support
//! - Deterministic language detection, sentiment scoring, POS tagging,
//!   named-entity recognition, and topic classification
//! - Lexicons and gazetteers as swappable data assets
//! - Optional parallel stage execution
//!
//! ## Quick start
//!
//! ```
//! use kotori::pipeline::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new().unwrap();
//! let result = pipeline.analyze("The weather is beautiful today").unwrap();
//!
//! assert_eq!(result.language.code(), "en");
//! assert_eq!(result.category.to_string(), "weather");
//! ```

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod document;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod samples;
pub mod sentiment;
pub mod tagger;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
