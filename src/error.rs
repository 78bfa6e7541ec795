//! Error types for the Textsim library.
//!
//! All errors are represented by the [`TextSimError`] enum. The error surface
//! is small by nature of pure computation: every metric operation is total
//! over its well-typed domain except the cases below.
//!
//! # Examples
//!
//! ```
//! use textsim::error::{Result, TextSimError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextSimError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Textsim operations.
#[derive(Error, Debug)]
pub enum TextSimError {
    /// Invalid argument supplied to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Metric-related errors (unknown metric name, etc.)
    #[error("Metric error: {0}")]
    Metric(String),
}

/// Result type alias for operations that may fail with TextSimError.
pub type Result<T> = std::result::Result<T, TextSimError>;

impl TextSimError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextSimError::InvalidArgument(msg.into())
    }

    /// Create a new metric error.
    pub fn metric<S: Into<String>>(msg: S) -> Self {
        TextSimError::Metric(msg.into())
    }
}
