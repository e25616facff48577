//! Command line argument parsing for the Kotori CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Kotori - a self-contained text analysis pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "kotori")]
#[command(about = "A self-contained text analysis pipeline for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KotoriArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KotoriArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text
    Analyze(AnalyzeArgs),

    /// List the built-in sample texts
    Samples(SamplesArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Analyze the built-in sample with this index instead
    #[arg(short, long, conflicts_with = "text")]
    pub sample: Option<usize>,

    /// Tokenizer to use
    #[arg(short, long, default_value = "script-word")]
    pub tokenizer: TokenizerArg,

    /// Emit punctuation as tokens
    #[arg(long)]
    pub punctuation: bool,

    /// Run independent stages in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Sentiment lexicon asset file (JSON)
    #[arg(long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Gazetteer asset file (JSON)
    #[arg(long, value_name = "GAZETTEER_FILE")]
    pub gazetteer: Option<PathBuf>,
}

/// Arguments for listing samples
#[derive(Parser, Debug, Clone)]
pub struct SamplesArgs {
    /// Analyze every sample as well as listing it
    #[arg(short, long)]
    pub analyze: bool,
}

/// Tokenizer choices exposed on the command line
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerArg {
    /// Unicode word boundaries with per-character CJK segmentation
    ScriptWord,
    /// Whitespace splitting only
    Whitespace,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
