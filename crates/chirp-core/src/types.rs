//! Core index and result types for chirp

use serde::{Deserialize, Serialize};

/// A pair of UTF-16 code-unit offsets into the analyzed text.
///
/// All indices the engine reports are UTF-16 code units rather than byte
/// offsets or scalar counts, so results line up with JavaScript, Java, and
/// Objective-C string indexing. Astral code points occupy two units.
///
/// The `end` field is inclusive, matching the ranges clients receive from
/// the platform's own parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Start offset
    pub start: i32,
    /// End offset (inclusive)
    pub end: i32,
}

impl Range {
    /// Create a new range from start and end offsets.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The zero range reported for empty or degenerate input.
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }
}

/// The result of running the weighted-length parser over a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParseResult {
    /// The weighted length used against the configured tweet limit. Most
    /// code points count for two units under the v2/v3 configurations,
    /// while a few ranges (ASCII, Latin-1, and friends) count for one.
    pub weighted_length: i32,

    /// The weighted length expressed relative to a limit of 1000, for
    /// length-meter UI that should not care about the configured maximum.
    pub permillage: i32,

    /// Whether the text is a valid tweet: non-empty, within the weighted
    /// limit, and free of invalid characters.
    pub is_valid: bool,

    /// The display range of the text, in UTF-16 units of the original
    /// (pre-normalization) input.
    pub display_text_range: Range,

    /// The prefix of the display range that still fits the weighted
    /// limit. Clients typically stop highlighting entities past its end.
    pub valid_text_range: Range,
}

impl ParseResult {
    /// A new ParseResult with all fields supplied as arguments.
    pub fn new(
        weighted_length: i32,
        permillage: i32,
        is_valid: bool,
        display_text_range: Range,
        valid_text_range: Range,
    ) -> Self {
        Self {
            weighted_length,
            permillage,
            is_valid,
            display_text_range,
            valid_text_range,
        }
    }

    /// The result reported for empty input: zero length, invalid.
    pub fn empty() -> Self {
        Self {
            weighted_length: 0,
            permillage: 0,
            is_valid: false,
            display_text_range: Range::empty(),
            valid_text_range: Range::empty(),
        }
    }
}

/// A caller-supplied highlight range: `(start, end)` in UTF-16 code units,
/// end exclusive. Hits carry no relation to extracted entities.
pub type Hit = (usize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_new() {
        let r = Range::new(3, 11);
        assert_eq!(r.start, 3);
        assert_eq!(r.end, 11);
    }

    #[test]
    fn test_empty_parse_result_is_invalid() {
        let r = ParseResult::empty();
        assert!(!r.is_valid);
        assert_eq!(r.weighted_length, 0);
        assert_eq!(r.permillage, 0);
        assert_eq!(r.display_text_range, Range::empty());
    }

    #[test]
    fn test_range_serde_roundtrip() {
        let r = Range::new(0, 279);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
