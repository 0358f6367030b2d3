//! Error types for pattern construction and scanning

use thiserror::Error;

/// Convenience alias for operations that can fail with a [`ScanError`]
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while building patterns or scanning text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// `scan` was called with an empty pattern sequence
    #[error("no patterns supplied to scan")]
    EmptyPatternSet,

    /// A pattern failed to construct
    #[error("invalid pattern `{name}`: {reason}")]
    InvalidPattern {
        /// Name the pattern was registered under
        name: String,
        /// Why construction failed
        reason: String,
    },
}
