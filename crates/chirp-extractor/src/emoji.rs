//! Permissive emoji sequence matching.
//!
//! The weighted-length calculator discounts emoji sequences to a single
//! default-weight character under v3 configurations. The matcher is
//! permissive: it recognizes the shape of emoji sequences (base +
//! modifiers, keycaps, flag pairs, ZWJ joins) without consulting an
//! emoji catalog.

/// Whether a character can begin an emoji sequence.
pub(crate) fn is_emoji_start(c: char) -> bool {
    matches!(c,
        '\u{00a9}' | '\u{00ae}' |
        '\u{203c}'..='\u{3299}' |
        '\u{1f000}'..='\u{1faff}'
    )
}

/// Modifiers that extend a sequence without a joiner: skin tones,
/// variation selectors, the keycap mark, regional indicators, and tag
/// characters for subdivision flags.
fn is_emoji_modifier(c: char) -> bool {
    matches!(c,
        '\u{1f3fb}'..='\u{1f3ff}' |
        '\u{fe0e}' | '\u{fe0f}' |
        '\u{20e3}' |
        '\u{1f1e6}'..='\u{1f1ff}' |
        '\u{e0000}'..='\u{e007f}'
    )
}

/// Match a keycap sequence (`#`, `*`, or a digit, optional U+FE0F,
/// then U+20E3) at the head of `input`. Returns bytes consumed.
pub(crate) fn match_keycap(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let base = chars.next()?;
    if !matches!(base, '#' | '*' | '0'..='9') {
        return None;
    }
    let mut consumed = base.len_utf8();
    match chars.next() {
        Some('\u{fe0f}') => {
            consumed += '\u{fe0f}'.len_utf8();
            if chars.next() == Some('\u{20e3}') {
                Some(consumed + '\u{20e3}'.len_utf8())
            } else {
                None
            }
        }
        Some('\u{20e3}') => Some(consumed + '\u{20e3}'.len_utf8()),
        _ => None,
    }
}

/// Match a non-keycap emoji sequence at the head of `input`.
/// Returns bytes consumed.
pub(crate) fn match_emoji(input: &str) -> Option<usize> {
    let first = input.chars().next()?;
    if !is_emoji_start(first) {
        return None;
    }

    let mut consumed = first.len_utf8();
    loop {
        let mut rest = input[consumed..].chars();
        match rest.next() {
            Some(c) if is_emoji_modifier(c) => consumed += c.len_utf8(),
            Some('\u{200d}') => {
                // A joiner only counts when another emoji follows it.
                match rest.next() {
                    Some(next) if is_emoji_start(next) => {
                        consumed += '\u{200d}'.len_utf8() + next.len_utf8();
                    }
                    _ => break,
                }
            }
            _ => break,
        }
    }

    Some(consumed)
}
