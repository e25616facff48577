//! Configuration for the analysis pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tokenizer selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Unicode word boundaries with per-character CJK segmentation (default).
    ScriptWord,
    /// Whitespace splitting only, for pre-segmented input.
    Whitespace,
}

/// Configuration for building an [`AnalysisPipeline`](crate::pipeline::AnalysisPipeline).
///
/// Resource paths are optional; when absent, the embedded default lexicon
/// and gazetteer are used. Missing or malformed resource files are fatal at
/// construction, never at analysis time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Which tokenizer the pipeline uses.
    pub tokenizer: TokenizerKind,

    /// Emit punctuation code points as tokens (script-word tokenizer only).
    pub include_punctuation: bool,

    /// Run the independent stages on rayon worker threads.
    pub parallel: bool,

    /// Optional sentiment lexicon asset (JSON).
    pub lexicon_path: Option<PathBuf>,

    /// Optional gazetteer asset (JSON).
    pub gazetteer_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            tokenizer: TokenizerKind::ScriptWord,
            include_punctuation: false,
            parallel: false,
            lexicon_path: None,
            gazetteer_path: None,
        }
    }
}
