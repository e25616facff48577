//! Command line interface for Kotori.
//!
//! The CLI is a thin presentation layer: it parses arguments, builds a
//! pipeline, and renders [`AnalysisResult`](crate::pipeline::AnalysisResult)
//! fields. All analysis happens in the library.

pub mod args;
pub mod commands;
pub mod output;
