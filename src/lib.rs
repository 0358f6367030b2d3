//! Span extraction for ordinals, integers and calendar dates in free-form text
//!
//! This library scans text for a fixed set of lexical shapes and returns
//! every occurrence in left-to-right order: mixed ordinals (`5th`, `1st`),
//! integers (including comma-grouped and decimal forms), ISO-8601 dates
//! with optional time and timezone, and `DD Mon YYYY` dates. The contract
//! is span extraction only: matches carry the exact substring and its
//! offsets, never a normalized calendar value.
//!
//! # Example
//!
//! ```
//! use lexscan::{integers, mixed_ordinals, scan};
//!
//! let text = "On the 5th of May, 77.9% of pandas nap.";
//! let matches = scan(text, [mixed_ordinals(), integers()])?;
//!
//! let found: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
//! assert_eq!(found, ["5th", "77.9"]);
//! # Ok::<(), lexscan::ScanError>(())
//! ```
//!
//! Patterns are applied independently: when a date pattern and
//! [`integers`] are supplied together, digit runs inside a date surface
//! under both. Callers that need one winner per region resolve the
//! overlap themselves.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use error::{Result, ScanError};
pub use pattern::{dates_dd_mmm_yyyy, dates_iso8601, integers, mixed_ordinals, Pattern};
pub use scanner::{scan, PatternSet};
pub use span::{ScanMatch, Span};

/// Error types
pub mod error;

/// Pattern definitions and the built-in registry
pub mod pattern;

/// Combined multi-pattern scanning
pub mod scanner;

/// Located match results
pub mod span;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
