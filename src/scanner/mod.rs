//! Combined multi-pattern scanning

use crate::error::{Result, ScanError};
use crate::pattern::Pattern;
use crate::span::ScanMatch;
use tracing::{debug, trace};

/// Pattern input seam for [`scan`]: one pattern or a sequence of patterns
///
/// Implemented for a single `&Pattern` as well as slices, arrays and
/// vectors of pattern references, so callers pass whichever shape they
/// have without wrapping.
pub trait PatternSet<'p> {
    /// The patterns to apply, in supply order
    fn patterns(&self) -> Vec<&'p Pattern>;
}

impl<'p> PatternSet<'p> for &'p Pattern {
    fn patterns(&self) -> Vec<&'p Pattern> {
        vec![*self]
    }
}

impl<'s, 'p> PatternSet<'p> for &'s [&'p Pattern] {
    fn patterns(&self) -> Vec<&'p Pattern> {
        self.to_vec()
    }
}

impl<'p, const N: usize> PatternSet<'p> for [&'p Pattern; N] {
    fn patterns(&self) -> Vec<&'p Pattern> {
        self.to_vec()
    }
}

impl<'p> PatternSet<'p> for Vec<&'p Pattern> {
    fn patterns(&self) -> Vec<&'p Pattern> {
        self.clone()
    }
}

/// Apply one or more patterns to `text` and collect every occurrence
///
/// Each pattern is applied independently over the full text, finding all
/// non-overlapping occurrences leftmost-first. The merged sequence is
/// ordered by ascending start offset; two matches starting at the same
/// offset keep the order their patterns were supplied in. Matches from
/// different patterns are never filtered against each other, so a digit
/// run inside a date can surface under both a date pattern and
/// [`integers`](crate::integers) in the same call.
///
/// Text without any occurrence yields `Ok` with an empty vector; an empty
/// pattern sequence is a caller error and yields
/// [`ScanError::EmptyPatternSet`].
///
/// # Examples
///
/// ```
/// use lexscan::{dates_iso8601, integers, scan};
///
/// let matches = scan("2018-06-22", [dates_iso8601(), integers()])?;
/// let found: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
/// assert_eq!(found, ["2018-06-22", "2018", "06", "22"]);
/// # Ok::<(), lexscan::ScanError>(())
/// ```
pub fn scan<'p, 't>(
    text: &'t str,
    patterns: impl PatternSet<'p>,
) -> Result<Vec<ScanMatch<'p, 't>>> {
    let patterns = patterns.patterns();
    if patterns.is_empty() {
        return Err(ScanError::EmptyPatternSet);
    }

    debug!(patterns = patterns.len(), bytes = text.len(), "scanning text");

    let mut matches = Vec::new();
    for pattern in patterns {
        let before = matches.len();
        matches.extend(pattern.find_iter(text));
        trace!(
            pattern = pattern.name(),
            found = matches.len() - before,
            "pattern applied"
        );
    }

    // Stable sort: same-offset matches keep pattern supply order
    matches.sort_by_key(|found| found.start());

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{dates_iso8601, integers, mixed_ordinals};

    #[test]
    fn test_single_and_list_forms_agree() {
        let text = "the 5th of 12 months";
        let single = scan(text, mixed_ordinals()).expect("scan");
        let listed = scan(text, vec![mixed_ordinals()]).expect("scan");
        assert_eq!(single, listed);
    }

    #[test]
    fn test_empty_pattern_set_is_an_error() {
        let none: Vec<&Pattern> = Vec::new();
        assert_eq!(scan("text", none), Err(ScanError::EmptyPatternSet));
    }

    #[test]
    fn test_no_match_is_empty_not_an_error() {
        let matches = scan("no digits here", integers()).expect("scan");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_tie_break_follows_supply_order() {
        // Both patterns produce a match at offset 0
        let date_first = scan("2018-06-22", [dates_iso8601(), integers()]).expect("scan");
        assert_eq!(date_first[0].pattern().name(), "dates_iso8601");
        assert_eq!(date_first[1].pattern().name(), "integers");

        let int_first = scan("2018-06-22", [integers(), dates_iso8601()]).expect("scan");
        assert_eq!(int_first[0].pattern().name(), "integers");
        assert_eq!(int_first[0].as_str(), "2018");
        assert_eq!(int_first[1].pattern().name(), "dates_iso8601");
    }

    #[test]
    fn test_slice_form() {
        let patterns: Vec<&Pattern> = vec![integers(), mixed_ordinals()];
        let matches = scan("1 then 2nd", patterns.as_slice()).expect("scan");
        let found: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["1", "2nd"]);
    }
}
