//! Located match results produced by scanning text

use crate::pattern::Pattern;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into a scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

fn serialize_pattern_name<S>(pattern: &&Pattern, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(pattern.name())
}

/// One located occurrence of a [`Pattern`] in a scanned text
///
/// A match borrows the text it was found in; it records the owning
/// pattern, the matched substring and its byte span. Matches are created
/// by [`scan`](crate::scan) or [`Pattern::find_iter`] and are read-only.
///
/// # Examples
///
/// ```
/// use lexscan::{integers, scan};
///
/// let matches = scan("no fewer than 40 pandas", integers())?;
/// assert_eq!(matches[0].as_str(), "40");
/// assert_eq!(matches[0].span().start, 14);
/// assert_eq!(matches[0].pattern().name(), "integers");
/// # Ok::<(), lexscan::ScanError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ScanMatch<'p, 't> {
    #[serde(serialize_with = "serialize_pattern_name")]
    pattern: &'p Pattern,
    text: &'t str,
    span: Span,
}

impl<'p, 't> ScanMatch<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, found: regex::Match<'t>) -> Self {
        Self {
            pattern,
            text: found.as_str(),
            span: Span::new(found.start(), found.end()),
        }
    }

    /// The pattern that produced this match
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// The matched substring
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Byte span of the match within the scanned text
    pub fn span(&self) -> Span {
        self.span
    }

    /// Byte offset where the match starts
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past where the match ends
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Look up a named sub-capture within the matched substring
    ///
    /// The date patterns expose `year`, `month` and `day` groups. Returns
    /// `None` when the owning pattern defines no such group.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexscan::{dates_iso8601, scan};
    ///
    /// let matches = scan("I was born 2018-06-22.", dates_iso8601())?;
    /// assert_eq!(matches[0].capture("year"), Some("2018"));
    /// assert_eq!(matches[0].capture("month"), Some("06"));
    /// # Ok::<(), lexscan::ScanError>(())
    /// ```
    pub fn capture(&self, name: &str) -> Option<&'t str> {
        self.pattern
            .captures(self.text)
            .and_then(|caps| caps.name(name))
            .map(|group| group.as_str())
    }
}

impl PartialEq for ScanMatch<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.name() == other.pattern.name()
            && self.span == other.span
            && self.text == other.text
    }
}

impl Eq for ScanMatch<'_, '_> {}
