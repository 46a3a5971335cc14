//! Shared character classes for the entity scanner.

/// Unicode whitespace as the scanner understands it: ASCII controls,
/// the general-punctuation spaces, and the CJK ideographic space.
pub(crate) fn is_unicode_space(c: char) -> bool {
    matches!(c,
        '\u{0020}' | '\u{0085}' | '\u{00A0}' | '\u{1680}' | '\u{180E}' |
        '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' |
        '\u{0009}'..='\u{000D}' | '\u{2000}'..='\u{200A}'
    )
}

/// ASCII punctuation that terminates a permissive domain run.
pub(crate) fn is_url_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Characters that make a tweet invalid wherever they appear.
pub(crate) fn is_invalid_char(c: char) -> bool {
    matches!(c, '\u{fffe}' | '\u{feff}' | '\u{ffff}')
}

/// Latin letters with diacritics, as allowed in domains and URL paths.
pub(crate) fn is_latin_accent(c: char) -> bool {
    matches!(c,
        '\u{00c0}'..='\u{00d6}' |
        '\u{00d8}'..='\u{00f6}' |
        '\u{00f8}'..='\u{00ff}' |
        '\u{0100}'..='\u{024f}' |
        '\u{0253}'..='\u{0254}' |
        '\u{0256}'..='\u{0257}' |
        '\u{0259}' |
        '\u{025b}' |
        '\u{0263}' |
        '\u{0268}' |
        '\u{026f}' |
        '\u{0272}' |
        '\u{0289}' |
        '\u{028b}' |
        '\u{02bb}' |
        '\u{0300}'..='\u{036f}' |
        '\u{1e00}'..='\u{1eff}'
    )
}

pub(crate) fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04ff}')
}

/// UTF-16 length of a string slice, as an i32 offset delta.
pub(crate) fn utf16_len(s: &str) -> i32 {
    s.chars().map(|c| c.len_utf16() as i32).sum()
}
