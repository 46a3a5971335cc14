//! The plain extractor: entity lists with UTF-16 indices, no
//! validation data.

use crate::chars::{is_latin_accent, is_unicode_space, utf16_len};
use crate::mention::match_username;
use crate::scan::{scan, RawKind, RawSpan};
use chirp_core::{Entity, EntityType};
use std::iter::Peekable;
use std::str::CharIndices;

/// Which span categories an extraction call wants back.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KindFilter {
    pub urls: bool,
    pub urls_without_protocol: bool,
    pub hashtags: bool,
    pub cashtags: bool,
    pub mentions: bool,
    pub lists: bool,
}

impl KindFilter {
    pub(crate) fn accepts(&self, kind: RawKind) -> bool {
        match kind {
            RawKind::Url => self.urls,
            RawKind::UrlNoProtocol => self.urls_without_protocol,
            RawKind::Hashtag => self.hashtags,
            RawKind::Cashtag => self.cashtags,
            RawKind::Mention => self.mentions,
            RawKind::List => self.lists,
            RawKind::Emoji | RawKind::Invalid => false,
        }
    }

    pub(crate) fn urls(extract_url_without_protocol: bool) -> Self {
        Self {
            urls: true,
            urls_without_protocol: extract_url_without_protocol,
            ..Self::default()
        }
    }

    pub(crate) fn hashtags() -> Self {
        Self {
            hashtags: true,
            ..Self::default()
        }
    }

    pub(crate) fn cashtags() -> Self {
        Self {
            cashtags: true,
            ..Self::default()
        }
    }

    pub(crate) fn mentions() -> Self {
        Self {
            mentions: true,
            ..Self::default()
        }
    }

    pub(crate) fn mentions_or_lists() -> Self {
        Self {
            mentions: true,
            lists: true,
            ..Self::default()
        }
    }

    pub(crate) fn entities(extract_url_without_protocol: bool) -> Self {
        Self {
            urls: true,
            urls_without_protocol: extract_url_without_protocol,
            hashtags: true,
            cashtags: true,
            mentions: true,
            lists: true,
        }
    }

    pub(crate) fn none() -> Self {
        Self::default()
    }
}

/// Advance the char iterator up to `byte_limit`, returning the UTF-16
/// units passed over.
pub(crate) fn advance_utf16(iter: &mut Peekable<CharIndices>, byte_limit: usize) -> i32 {
    let mut units = 0;
    while let Some((pos, _)) = iter.peek() {
        if *pos >= byte_limit {
            break;
        }
        let (_, c) = iter.next().expect("peeked");
        units += c.len_utf16() as i32;
    }
    units
}

/// Build a public entity from a raw span and its UTF-16 bounds.
pub(crate) fn entity_from_span(text: &str, span: &RawSpan, start: i32, end: i32) -> Entity {
    let matched = &text[span.start..span.end];
    match span.kind {
        RawKind::Url | RawKind::UrlNoProtocol => {
            Entity::new(EntityType::Url, matched, start, end)
        }
        RawKind::Hashtag => Entity::new(EntityType::Hashtag, strip_sigil(matched), start, end),
        RawKind::Cashtag => Entity::new(EntityType::Cashtag, strip_sigil(matched), start, end),
        RawKind::Mention => Entity::new(EntityType::Mention, strip_sigil(matched), start, end),
        RawKind::List => {
            let slug_start = span.slug_start.expect("list spans carry a slug");
            let username = strip_sigil(&text[span.start..slug_start]);
            let slug = &text[slug_start..span.end];
            Entity::new_list(username, slug, start, end)
        }
        RawKind::Emoji | RawKind::Invalid => {
            unreachable!("emoji and invalid spans never become entities")
        }
    }
}

fn strip_sigil(matched: &str) -> &str {
    let sigil = matched.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
    &matched[sigil..]
}

/// Extracts entities from tweet text with no length validation.
///
/// # Example
///
/// ```
/// use chirp_extractor::Extractor;
///
/// let extractor = Extractor::new();
/// let tags = extractor.extract_hashtags("#rust is #fun");
/// assert_eq!(tags, vec!["rust", "fun"]);
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    extract_url_without_protocol: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor that also detects scheme-less URLs.
    pub fn new() -> Self {
        Self {
            extract_url_without_protocol: true,
        }
    }

    /// Whether bare `example.com` forms are detected as URLs.
    pub fn get_extract_url_without_protocol(&self) -> bool {
        self.extract_url_without_protocol
    }

    /// Toggle detection of scheme-less URLs.
    pub fn set_extract_url_without_protocol(&mut self, value: bool) {
        self.extract_url_without_protocol = value;
    }

    fn extract(&self, text: &str, filter: KindFilter) -> Vec<Entity> {
        if text.is_empty() {
            return Vec::new();
        }
        let spans = scan(text);
        let mut iter = text.char_indices().peekable();
        let mut cursor = 0i32;
        let mut entities = Vec::new();
        for span in &spans {
            if !filter.accepts(span.kind) {
                continue;
            }
            cursor += advance_utf16(&mut iter, span.start);
            let units = advance_utf16(&mut iter, span.end);
            entities.push(entity_from_span(text, span, cursor, cursor + units));
            cursor += units;
        }
        entities
    }

    /// Extract URLs, subject to the scheme-less URL setting.
    pub fn extract_urls_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(text, KindFilter::urls(self.extract_url_without_protocol))
    }

    /// Extract URLs as strings.
    pub fn extract_urls(&self, text: &str) -> Vec<String> {
        self.extract_urls_with_indices(text)
            .into_iter()
            .map(|e| e.value)
            .collect()
    }

    /// Extract hashtags with indices.
    pub fn extract_hashtags_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(text, KindFilter::hashtags())
    }

    /// Extract hashtag values, without the `#`.
    pub fn extract_hashtags(&self, text: &str) -> Vec<String> {
        self.extract_hashtags_with_indices(text)
            .into_iter()
            .map(|e| e.value)
            .collect()
    }

    /// Extract cashtags with indices.
    pub fn extract_cashtags_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(text, KindFilter::cashtags())
    }

    /// Extract cashtag values, without the `$`.
    pub fn extract_cashtags(&self, text: &str) -> Vec<String> {
        self.extract_cashtags_with_indices(text)
            .into_iter()
            .map(|e| e.value)
            .collect()
    }

    /// Extract plain mentions with indices. List mentions are not
    /// included; use [`Extractor::extract_mentions_or_lists_with_indices`].
    pub fn extract_mentioned_screennames_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(text, KindFilter::mentions())
    }

    /// Extract mentioned screen names, without the `@`.
    pub fn extract_mentioned_screennames(&self, text: &str) -> Vec<String> {
        self.extract_mentioned_screennames_with_indices(text)
            .into_iter()
            .map(|e| e.value)
            .collect()
    }

    /// Extract mentions and list mentions with indices.
    pub fn extract_mentions_or_lists_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(text, KindFilter::mentions_or_lists())
    }

    /// Extract every entity category at once, ordered by position.
    pub fn extract_entities_with_indices(&self, text: &str) -> Vec<Entity> {
        self.extract(
            text,
            KindFilter::entities(self.extract_url_without_protocol),
        )
    }

    /// Extract the reply username: a mention that is the first thing in
    /// the text after optional whitespace.
    pub fn extract_reply_username(&self, text: &str) -> Option<Entity> {
        let (start_byte, first) = text
            .char_indices()
            .find(|(_, c)| !is_unicode_space(*c))?;
        if first != '@' && first != '\u{ff20}' {
            return None;
        }

        let rest = &text[start_byte..];
        let len = match_username(rest)?;

        let after = &rest[len..];
        if let Some(nc) = after.chars().next() {
            if nc == '@' || nc == '\u{ff20}' || nc == '-' || is_latin_accent(nc)
                || after.starts_with("://")
            {
                return None;
            }
        }

        let start = utf16_len(&text[..start_byte]);
        let end = start + utf16_len(&rest[..len]);
        Some(Entity::new(
            EntityType::Mention,
            strip_sigil(&rest[..len]),
            start,
            end,
        ))
    }
}
