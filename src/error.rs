//! Error types for the Synoptic library.
//!
//! The rewrite pipeline itself never fails: a query that cannot be expanded is
//! passed through unchanged (see [`crate::rewrite::RewriteOutcome`]). Errors only
//! arise on the I/O facing surface, such as loading a synonym dictionary or a
//! configuration file, or parsing operator and minimum-should-match strings.
//!
//! # Examples
//!
//! ```
//! use synoptic::error::{SynopticError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynopticError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Synoptic operations.
#[derive(Error, Debug)]
pub enum SynopticError {
    /// I/O errors (reading dictionaries, configuration files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Parse errors (operators, minimum-should-match expressions, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Synonym dictionary errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SynopticError.
pub type Result<T> = std::result::Result<T, SynopticError>;

impl SynopticError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SynopticError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynopticError::Parse(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SynopticError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SynopticError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
