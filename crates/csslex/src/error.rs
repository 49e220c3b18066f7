//! Error types for the lexical layer.
//!
//! Extraction itself never fails: missing markers or declarations produce
//! empty results. Errors are reserved for input that cannot be treated as
//! stylesheet text at all, and for strict dialect parsing.

use thiserror::Error;

/// Errors that can occur when preparing input for the extractors.
///
/// # Examples
///
/// ```rust
/// use csslex::{CsslexError, Dialect};
///
/// let err = "stylus".parse::<Dialect>().unwrap_err();
/// assert!(matches!(err, CsslexError::UnknownDialect(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsslexError {
    /// A dialect name other than `scss`, `sass` or `less` was given to the
    /// strict parser.
    #[error("unknown stylesheet dialect: {0}")]
    UnknownDialect(String),

    /// The input bytes are not valid UTF-8.
    #[error("source is not valid UTF-8 text")]
    NotText(#[from] std::str::Utf8Error),
}
