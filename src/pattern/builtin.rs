//! Built-in lexical pattern grammars
//!
//! The four recognizers the library ships with, compiled once at first
//! use. Each grammar is word-bounded on both sides so a token is never
//! extracted from inside a longer run of word characters.

use crate::pattern::Pattern;
use once_cell::sync::Lazy;

/// Digit run followed by a lowercase English ordinal suffix.
const MIXED_ORDINALS_EXPR: &str = r"\b\d+(?:st|nd|rd|th)\b";

/// Digit run with comma or decimal continuations collapsed into one token.
// TODO: decide whether a comma group like 12,4,7 should stay a single
// token or split into one match per group.
const INTEGERS_EXPR: &str = r"\b\d+(?:[,.]\d+)*\b";

/// YYYY-MM-DD, optional time of day, optional timezone designator.
/// Month is held to 01-12 and day to 01-31 in the grammar itself;
/// day-per-month pairs (Feb 30 and friends) are not cross-checked.
const DATES_ISO8601_EXPR: &str = r"\b(?P<year>\d{4})-(?P<month>0[1-9]|1[0-2])-(?P<day>0[1-9]|[12]\d|3[01])(?:[ T]\d{2}:\d{2}(?::\d{2}(?:\.\d{3})?)?(?:Z|[A-Z]{3}|[-+]\d{4})?)?\b";

/// One-to-two digit day, three-letter month abbreviation, four-digit year,
/// with an optional comma after the month.
const DATES_DD_MMM_YYYY_EXPR: &str = r"\b(?P<day>\d{1,2}) (?P<month>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec),? (?P<year>\d{4})\b";

static MIXED_ORDINALS: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("mixed_ordinals", MIXED_ORDINALS_EXPR).expect("builtin grammar must compile")
});

static INTEGERS: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("integers", INTEGERS_EXPR).expect("builtin grammar must compile"));

static DATES_ISO8601: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("dates_iso8601", DATES_ISO8601_EXPR).expect("builtin grammar must compile")
});

static DATES_DD_MMM_YYYY: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new("dates_dd_mmm_yyyy", DATES_DD_MMM_YYYY_EXPR)
        .expect("builtin grammar must compile")
});

/// Numbers carrying an ordinal suffix, such as `5th` or `22nd`
///
/// Only orthographic shape is matched: the grammar accepts any of the four
/// suffixes after any digit run, so `5rd` is extracted too.
pub fn mixed_ordinals() -> &'static Pattern {
    &MIXED_ORDINALS
}

/// Integer tokens, including comma-grouped and decimal forms
///
/// `12,4,7` and `77.9` are each one match; a trailing `.` or `%` stays
/// outside the span. A leading sign is treated as punctuation, so `15-20`
/// yields both endpoints.
pub fn integers() -> &'static Pattern {
    &INTEGERS
}

/// ISO-8601 calendar dates, optionally extended with time and timezone
///
/// Accepts `YYYY-MM-DD`, a ` ` or `T` separated `HH:MM[:SS[.mmm]]` time,
/// and a trailing `Z`, three-letter abbreviation or signed four-digit
/// offset. A contiguous date-time is always one match. Exposes `year`,
/// `month` and `day` captures.
pub fn dates_iso8601() -> &'static Pattern {
    &DATES_ISO8601
}

/// Dates written as `25 Jan 2017` or `25 Jan, 2017`
///
/// The month abbreviation is validated against the twelve standard forms.
/// Exposes `day`, `month` and `year` captures.
pub fn dates_dd_mmm_yyyy() -> &'static Pattern {
    &DATES_DD_MMM_YYYY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(pattern: &'static Pattern, text: &str) -> Vec<String> {
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_ordinal_shapes() {
        assert_eq!(extract(mixed_ordinals(), "the 5th and the 1st"), ["5th", "1st"]);
        assert_eq!(extract(mixed_ordinals(), "22nd, 3rd"), ["22nd", "3rd"]);
        // Suffix agreement is not checked
        assert_eq!(extract(mixed_ordinals(), "a 5rd thing"), ["5rd"]);
    }

    #[test]
    fn test_ordinal_rejects_embedded_and_uppercase() {
        assert!(extract(mixed_ordinals(), "x5th").is_empty());
        assert!(extract(mixed_ordinals(), "5thly").is_empty());
        assert!(extract(mixed_ordinals(), "5TH").is_empty());
        assert!(extract(mixed_ordinals(), "5 th").is_empty());
    }

    #[test]
    fn test_integer_shapes() {
        assert_eq!(extract(integers(), "began in 1845"), ["1845"]);
        assert_eq!(extract(integers(), "15-20 years"), ["15", "20"]);
        assert_eq!(extract(integers(), "12,4,7."), ["12,4,7"]);
        assert_eq!(extract(integers(), "77.9% of them"), ["77.9"]);
        assert_eq!(extract(integers(), "toward 80."), ["80"]);
    }

    #[test]
    fn test_integer_skips_ordinals() {
        assert!(extract(integers(), "the 5th of May").is_empty());
    }

    #[test]
    fn test_iso8601_rejects_bad_calendar_fields() {
        assert!(extract(dates_iso8601(), "born 2015-13-25.").is_empty());
        assert!(extract(dates_iso8601(), "born 2015-07-32.").is_empty());
        assert!(extract(dates_iso8601(), "born 2015-00-10.").is_empty());
        assert!(extract(dates_iso8601(), "born 2015-07-00.").is_empty());
    }

    #[test]
    fn test_iso8601_date_time_is_one_match() {
        assert_eq!(
            extract(dates_iso8601(), "at 2018-06-22 18:22:19.123-0800 sharp"),
            ["2018-06-22 18:22:19.123-0800"]
        );
        assert_eq!(
            extract(dates_iso8601(), "at 2018-06-22T18:22Z sharp"),
            ["2018-06-22T18:22Z"]
        );
    }

    #[test]
    fn test_iso8601_day_month_boundaries() {
        assert_eq!(extract(dates_iso8601(), "2018-12-31"), ["2018-12-31"]);
        assert_eq!(extract(dates_iso8601(), "2018-01-01"), ["2018-01-01"]);
        // The known gap: month length is not cross-checked
        assert_eq!(extract(dates_iso8601(), "2018-02-30"), ["2018-02-30"]);
    }

    #[test]
    fn test_dd_mmm_yyyy_shapes() {
        assert_eq!(extract(dates_dd_mmm_yyyy(), "born 25 Jan 2017."), ["25 Jan 2017"]);
        assert_eq!(
            extract(dates_dd_mmm_yyyy(), "born 25 Jan, 2017."),
            ["25 Jan, 2017"]
        );
        assert_eq!(extract(dates_dd_mmm_yyyy(), "on 3 Dec 1999"), ["3 Dec 1999"]);
    }

    #[test]
    fn test_dd_mmm_yyyy_rejects_unknown_month() {
        assert!(extract(dates_dd_mmm_yyyy(), "born 25 Foo 2017.").is_empty());
        assert!(extract(dates_dd_mmm_yyyy(), "born 25 jan 2017.").is_empty());
    }
}
