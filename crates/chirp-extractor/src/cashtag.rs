//! Cashtag candidate matching.
//!
//! Stock symbols: `$` plus 1-6 ASCII letters, optionally a `.` or `_`
//! and 1-2 more letters (`$BRK.A`). Case-insensitive at match time.

use regex::Regex;
use std::sync::LazyLock;

static CASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$[A-Za-z]{1,6}(?:[._][A-Za-z]{1,2})?").expect("valid regex")
});

/// Match a cashtag at the head of `input`, including the `$`.
/// Returns bytes consumed.
pub(crate) fn match_cashtag(input: &str) -> Option<usize> {
    let m = CASHTAG_RE.find(input)?;
    // A trailing letter or digit means the symbol ran too long.
    if let Some(c) = input[m.end()..].chars().next() {
        if c.is_ascii_alphanumeric() {
            return None;
        }
    }
    Some(m.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_cashtag() {
        assert_eq!(match_cashtag("$AAPL"), Some(5));
        assert_eq!(match_cashtag("$AAPL is great"), Some(5));
    }

    #[test]
    fn test_dotted_and_underscored() {
        assert_eq!(match_cashtag("$BRK.A"), Some(6));
        assert_eq!(match_cashtag("$TEST_A"), Some(7));
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(match_cashtag("$aapl"), Some(5));
    }

    #[test]
    fn test_too_long_rejected() {
        assert_eq!(match_cashtag("$ABCDEFG"), None);
        assert_eq!(match_cashtag("$AAPL1"), None);
    }

    #[test]
    fn test_no_letters_rejected() {
        assert_eq!(match_cashtag("$12"), None);
        assert_eq!(match_cashtag("$"), None);
    }
}
