//! Single-pass entity scanner.
//!
//! One left-to-right walk over the text finds every candidate span:
//! URLs, hashtags, cashtags, mentions and lists, emoji sequences, and
//! invalid characters. Because each recognized candidate is consumed
//! whole, URL spans automatically suppress hashtag/mention/cashtag
//! matches inside them; callers filter the span list down to the
//! categories they asked for.

use crate::cashtag::match_cashtag;
use crate::chars::{is_invalid_char, is_latin_accent, is_unicode_space};
use crate::emoji::{is_emoji_start, match_emoji, match_keycap};
use crate::hashtag::{match_hashtag, valid_hashtag_predecessor};
use crate::mention::{invalid_mention_predecessor, is_rt_prefix, match_mention_or_list};
use crate::url::{match_protocol, match_protocol_url, match_url_without_protocol};

/// Candidate span categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawKind {
    Url,
    UrlNoProtocol,
    Hashtag,
    Cashtag,
    Mention,
    List,
    Emoji,
    Invalid,
}

/// A candidate span in byte offsets of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawSpan {
    pub kind: RawKind,
    pub start: usize,
    pub end: usize,
    /// For lists, the byte offset of the slug's `/`
    pub slug_start: Option<usize>,
}

impl RawSpan {
    fn new(kind: RawKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            slug_start: None,
        }
    }
}

/// Scan `text` and return every candidate span in document order.
pub(crate) fn scan(text: &str) -> Vec<RawSpan> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0usize;
    let mut prev: Option<char> = None;

    while pos < bytes.len() {
        let rest = &text[pos..];
        let b = bytes[pos];

        let consumed = if b < 0x80 {
            match b {
                b'@' => try_mention(text, pos, prev, &mut spans),
                b'#' => try_hash(text, pos, prev, &mut spans),
                b'$' => try_cashtag(text, pos, prev, &mut spans),
                b'*' => try_keycap(rest, pos, &mut spans),
                b'0'..=b'9' => {
                    let k = try_keycap(rest, pos, &mut spans);
                    if k > 0 {
                        k
                    } else {
                        try_uwp(text, pos, prev, &mut spans)
                    }
                }
                b'h' | b'H' => {
                    let u = try_protocol_url(text, pos, prev, &mut spans);
                    if u > 0 {
                        u
                    } else {
                        try_uwp(text, pos, prev, &mut spans)
                    }
                }
                _ if b.is_ascii_alphabetic() => try_uwp(text, pos, prev, &mut spans),
                _ => 0,
            }
        } else {
            let c = rest.chars().next().expect("non-empty rest");
            if is_invalid_char(c) {
                spans.push(RawSpan::new(RawKind::Invalid, pos, pos + c.len_utf8()));
                c.len_utf8()
            } else if c == '\u{ff20}' {
                try_mention(text, pos, prev, &mut spans)
            } else if c == '\u{ff03}' {
                try_hash(text, pos, prev, &mut spans)
            } else if is_latin_accent(c) {
                try_uwp(text, pos, prev, &mut spans)
            } else if is_emoji_start(c) {
                match match_emoji(rest) {
                    Some(len) => {
                        spans.push(RawSpan::new(RawKind::Emoji, pos, pos + len));
                        len
                    }
                    None => 0,
                }
            } else {
                0
            }
        };

        if consumed > 0 {
            pos += consumed;
            prev = text[..pos].chars().next_back();
        } else {
            let c = rest.chars().next().expect("non-empty rest");
            prev = Some(c);
            pos += c.len_utf8();
        }
    }

    log::trace!("scan found {} candidate spans", spans.len());
    spans
}

/// The byte length of the sigil at the head of `rest` (`@` or `＠`,
/// `#` or `＃`).
fn sigil_len(rest: &str) -> usize {
    rest.chars().next().map(|c| c.len_utf8()).unwrap_or(0)
}

fn try_mention(text: &str, pos: usize, prev: Option<char>, spans: &mut Vec<RawSpan>) -> usize {
    let rest = &text[pos..];
    let at_len = sigil_len(rest);

    if let Some(pc) = prev {
        if invalid_mention_predecessor(pc) && !is_rt_prefix(&text[..pos]) {
            // An email or word ran into the sigil; swallow the trailing
            // domain so no partial URL is extracted from it.
            return at_len + skip_url_without_protocol(&rest[at_len..]);
        }
    }

    let m = match match_mention_or_list(rest) {
        Some(m) => m,
        None => return at_len + skip_url_without_protocol(&rest[at_len..]),
    };

    let after = &rest[m.len..];
    if let Some(nc) = after.chars().next() {
        if nc == '@' || nc == '\u{ff20}' || nc == '-' || is_latin_accent(nc)
            || after.starts_with("://")
        {
            return at_len + skip_url_without_protocol(&rest[at_len..]);
        }
    }

    let mut span = RawSpan::new(
        if m.slug_start.is_some() {
            RawKind::List
        } else {
            RawKind::Mention
        },
        pos,
        pos + m.len,
    );
    span.slug_start = m.slug_start.map(|s| pos + s);
    spans.push(span);
    m.len
}

fn try_hash(text: &str, pos: usize, prev: Option<char>, spans: &mut Vec<RawSpan>) -> usize {
    let rest = &text[pos..];

    // Keycap emoji beats hashtag: "#️⃣" and friends.
    if let Some(len) = match_keycap(rest) {
        spans.push(RawSpan::new(RawKind::Emoji, pos, pos + len));
        return len;
    }

    if let Some(pc) = prev {
        if !valid_hashtag_predecessor(pc) {
            return 0;
        }
    }

    // "#http://…" is never a hashtag.
    let after = rest[sigil_len(rest)..].as_bytes();
    if after.len() >= 7 && after[..7].eq_ignore_ascii_case(b"http://") {
        return 0;
    }
    if after.len() >= 8 && after[..8].eq_ignore_ascii_case(b"https://") {
        return 0;
    }

    match match_hashtag(rest) {
        Some(len) => {
            spans.push(RawSpan::new(RawKind::Hashtag, pos, pos + len));
            len
        }
        None => 0,
    }
}

fn try_cashtag(text: &str, pos: usize, prev: Option<char>, spans: &mut Vec<RawSpan>) -> usize {
    if let Some(pc) = prev {
        if !is_unicode_space(pc) {
            return 0;
        }
    }

    let rest = &text[pos..];

    // "$http://…" and "$twitter.com" are neither cashtags nor URLs;
    // swallow the URL-shaped tail so it cannot match on its own.
    if match_protocol(&rest[1..]).is_some() {
        return 1 + skip_any_url(&rest[1..]);
    }
    match match_cashtag(rest) {
        Some(len) => {
            spans.push(RawSpan::new(RawKind::Cashtag, pos, pos + len));
            len
        }
        None => 1 + skip_any_url(&rest[1..]),
    }
}

fn try_keycap(rest: &str, pos: usize, spans: &mut Vec<RawSpan>) -> usize {
    match match_keycap(rest) {
        Some(len) => {
            spans.push(RawSpan::new(RawKind::Emoji, pos, pos + len));
            len
        }
        None => 0,
    }
}

fn try_protocol_url(text: &str, pos: usize, prev: Option<char>, spans: &mut Vec<RawSpan>) -> usize {
    if let Some(pc) = prev {
        if pc.is_ascii_alphanumeric()
            || matches!(pc, '@' | '\u{ff20}' | '#' | '\u{ff03}' | '$')
        {
            return 0;
        }
    }

    match match_protocol_url(&text[pos..]) {
        Some(len) => {
            spans.push(RawSpan::new(RawKind::Url, pos, pos + len));
            len
        }
        None => 0,
    }
}

fn try_uwp(text: &str, pos: usize, prev: Option<char>, spans: &mut Vec<RawSpan>) -> usize {
    if let Some(pc) = prev {
        if pc.is_ascii_alphanumeric()
            || is_latin_accent(pc)
            || matches!(pc, '-' | '_' | '.' | '/' | '@' | '\u{ff20}' | '#' | '\u{ff03}' | '$')
        {
            return 0;
        }
    }

    // Inside an unfinished protocol context ("http://-foo" and the
    // like), nothing before the next delimiter can start a URL.
    if in_protocol_context(&text[..pos]) {
        return 0;
    }

    let rest = &text[pos..];
    let len = match match_url_without_protocol(rest) {
        Some(len) => len,
        None => return 0,
    };

    // Followed by @: it was an email address all along.
    let after = &rest[len..];
    if after.starts_with('@') || after.starts_with('\u{ff20}') {
        return 0;
    }

    spans.push(RawSpan::new(RawKind::UrlNoProtocol, pos, pos + len));
    len
}

/// Whether the text since the last delimiter contains `://`.
fn in_protocol_context(before: &str) -> bool {
    let last_delim = before
        .char_indices()
        .rev()
        .find(|(_, c)| is_unicode_space(*c) || is_scan_delimiter(*c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    before[last_delim..].contains("://")
}

/// Characters that reset URL context: CJK runs, fullwidth forms, and
/// other blocks that never appear inside an ASCII URL.
fn is_scan_delimiter(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}' |
        '\u{3040}'..='\u{309F}' |
        '\u{30A0}'..='\u{30FF}' |
        '\u{4E00}'..='\u{9FFF}' |
        '\u{AC00}'..='\u{D7AF}' |
        '\u{FF00}'..='\u{FFEF}'
    )
}

/// Bytes to skip for a URL-without-protocol match (0 when none).
fn skip_url_without_protocol(input: &str) -> usize {
    match_url_without_protocol(input).unwrap_or(0)
}

/// Bytes to skip for any URL-shaped match (0 when none).
fn skip_any_url(input: &str) -> usize {
    match_protocol_url(input)
        .or_else(|| match_url_without_protocol(input))
        .unwrap_or(0)
}
