//! Error types for the Kotori library.
//!
//! This module provides error handling for all Kotori operations. All errors
//! are represented by the [`KotoriError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use kotori::error::{KotoriError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(KotoriError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Kotori operations.
///
/// This enum represents all possible errors that can occur in the Kotori
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
///
/// The analysis path itself is total: once a pipeline is constructed, every
/// input string produces a result. Errors are confined to initialization
/// (resource loading, configuration validation) and the CLI surface.
#[derive(Error, Debug)]
pub enum KotoriError {
    /// I/O errors (resource files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid pipeline settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource errors (empty or malformed lexicons, gazetteers, keyword tables)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis-related errors (tokenization, tagging, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KotoriError.
pub type Result<T> = std::result::Result<T, KotoriError>;

impl KotoriError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        KotoriError::Config(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        KotoriError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KotoriError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KotoriError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KotoriError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        KotoriError::Other(format!("Internal error: {}", msg.into()))
    }
}
