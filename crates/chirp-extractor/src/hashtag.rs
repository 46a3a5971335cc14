//! Hashtag candidate matching.
//!
//! A hashtag is `#` or `＃` followed by letters, marks, digits,
//! underscores, and a small set of special marks, and must contain at
//! least one letter or mark. Purely numeric tags are not hashtags.

use unicode_categories::UnicodeCategories;

/// Letters and combining marks count toward the "has a letter" rule.
#[inline]
pub(crate) fn is_tag_letter(c: char) -> bool {
    c.is_letter() || c.is_mark()
}

/// Characters allowed in hashtag text that do not count as letters.
#[inline]
fn is_tag_special(c: char) -> bool {
    c.is_number_decimal_digit()
        || c == '_'
        || matches!(
            c,
            '\u{200c}' // zero width non-joiner
            | '\u{200d}' // zero width joiner
            | '\u{a67e}' // kavyka
            | '\u{05be}' // maqaf
            | '\u{05f3}' // geresh
            | '\u{05f4}' // gershayim
            | '\u{ff5e}' // fullwidth tilde
            | '\u{301c}' // wave dash
            | '\u{309b}' // voiced sound mark
            | '\u{309c}' // semi-voiced sound mark
            | '\u{30a0}' // katakana double hyphen
            | '\u{30fb}' // katakana middle dot
            | '\u{3003}' // ditto mark
            | '\u{0f0b}' // tibetan tsheg
            | '\u{0f0c}' // tibetan tsheg bstar
            | '\u{00b7}' // middle dot
        )
}

/// Match a hashtag at the head of `input`, including the prefix.
/// Returns bytes consumed.
pub(crate) fn match_hashtag(input: &str) -> Option<usize> {
    let prefix_len = if input.starts_with('#') {
        1
    } else if input.starts_with('\u{ff03}') {
        '\u{ff03}'.len_utf8()
    } else {
        return None;
    };

    let after = &input[prefix_len..];

    // `#` + variation selector / keycap mark is an emoji, not a hashtag.
    if after.starts_with('\u{fe0f}') || after.starts_with('\u{20e3}') {
        return None;
    }

    let mut end = prefix_len;
    let mut has_letter = false;
    for c in after.chars() {
        if is_tag_letter(c) {
            has_letter = true;
        } else if !is_tag_special(c) {
            break;
        }
        end += c.len_utf8();
    }

    if has_letter {
        Some(end)
    } else {
        None
    }
}

/// Whether the character before a `#` allows a hashtag to start there.
/// Variation selectors are fine; `&` and letters/marks are not.
pub(crate) fn valid_hashtag_predecessor(c: char) -> bool {
    if c == '\u{fe0e}' || c == '\u{fe0f}' {
        return true;
    }
    c != '&' && !is_tag_letter(c)
}
