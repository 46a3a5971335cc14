//! Mention and list candidate matching.
//!
//! Mentions are `@`/`＠` plus 1-20 word characters; list mentions add
//! `/` and a 1-25 character slug that starts with a letter.

use regex::Regex;
use std::sync::LazyLock;

/// Username with optional list slug. Group 1 is the username, group 2
/// the slug including its leading slash.
static MENTION_OR_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[@\u{ff20}]([A-Za-z0-9_]{1,20})(/[A-Za-z][A-Za-z0-9_-]{0,24})?")
        .expect("valid regex")
});

/// A mention match at the head of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MentionMatch {
    /// Bytes consumed, including the sigil and any slug
    pub len: usize,
    /// Byte offset of the slug's `/`, when this is a list mention
    pub slug_start: Option<usize>,
}

/// Match `@username` or `@username/list` at the head of `input`.
pub(crate) fn match_mention_or_list(input: &str) -> Option<MentionMatch> {
    let caps = MENTION_OR_LIST_RE.captures(input)?;
    let whole = caps.get(0).expect("group 0 always present");
    let slug_start = caps.get(2).map(|m| m.start());
    Some(MentionMatch {
        len: whole.end(),
        slug_start,
    })
}

/// Match only the `@username` portion, ignoring any list slug.
pub(crate) fn match_username(input: &str) -> Option<usize> {
    let caps = MENTION_OR_LIST_RE.captures(input)?;
    Some(caps.get(1).expect("username group").end())
}

/// Characters that, directly before an `@`, rule out a mention. Word
/// characters catch emails; the sigils and `!#$%&*` catch runs of
/// symbols that the platform never treats as mention boundaries.
pub(crate) fn invalid_mention_predecessor(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '@' | '\u{ff20}' | '!' | '#' | '$' | '%' | '&' | '*')
}

/// Legacy retweet syntax: `RT@user` and `RT:@user` still mention, as
/// long as the `RT` itself starts the text or follows whitespace.
pub(crate) fn is_rt_prefix(before: &str) -> bool {
    let trimmed = before.strip_suffix(':').unwrap_or(before);
    if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
        return false;
    }
    let tail = &trimmed[trimmed.len() - 2..];
    if !tail.eq_ignore_ascii_case("rt") {
        return false;
    }
    trimmed[..trimmed.len() - 2]
        .chars()
        .next_back()
        .map(|c| c.is_whitespace())
        .unwrap_or(true)
}
