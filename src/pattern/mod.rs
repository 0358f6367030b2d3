//! Lexical patterns and the built-in pattern registry

pub mod builtin;
mod compile;
pub mod registry;

pub use builtin::{dates_dd_mmm_yyyy, dates_iso8601, integers, mixed_ordinals};
pub use registry::{all, lookup};

use crate::error::{Result, ScanError};
use crate::span::ScanMatch;
use regex::{Captures, Regex};
use std::fmt;

/// An immutable named lexical rule recognizing one category of substring
///
/// A pattern pairs a name (for lookup and debugging) with a compiled
/// recognition grammar. The four built-in patterns live in the
/// [`registry`]; custom patterns can be constructed with [`Pattern::new`]
/// and scanned with the same machinery.
///
/// # Examples
///
/// ```
/// use lexscan::{scan, Pattern};
///
/// let hex = Pattern::new("hex_literals", r"\b0x[0-9a-f]+\b")?;
/// let matches = scan("write 0xdead at 0xbeef", &hex)?;
/// assert_eq!(matches.len(), 2);
/// # Ok::<(), lexscan::ScanError>(())
/// ```
#[derive(Debug)]
pub struct Pattern {
    name: String,
    regex: Regex,
}

impl Pattern {
    /// Construct a pattern from a name and a regular-expression grammar
    ///
    /// Fails with [`ScanError::InvalidPattern`] when the name is empty or
    /// the expression does not compile within the size limits.
    pub fn new(name: impl Into<String>, expression: &str) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScanError::InvalidPattern {
                name,
                reason: "empty name".to_string(),
            });
        }
        let regex = compile::compile_bounded(&name, expression)?;
        Ok(Self { name, regex })
    }

    /// Name the pattern is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the pattern occurs anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Iterate over all non-overlapping occurrences in `text`, leftmost first
    pub fn find_iter<'p, 't>(&'p self, text: &'t str) -> impl Iterator<Item = ScanMatch<'p, 't>> {
        self.regex
            .find_iter(text)
            .map(move |found| ScanMatch::new(self, found))
    }

    /// Named sub-captures of the first occurrence in `text`
    pub(crate) fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
