//! Autolinking: wraps extracted entities in anchor markup.

use crate::escape::{escape_brackets, escape_html};
use chirp_core::{Entity, EntityType};
use chirp_extractor::Extractor;

/// Default CSS class for auto-linked list URLs
pub const DEFAULT_LIST_CLASS: &str = "tweet-url list-slug";

/// Default CSS class for auto-linked username URLs
pub const DEFAULT_USERNAME_CLASS: &str = "tweet-url username";

/// Default CSS class for auto-linked hashtag URLs
pub const DEFAULT_HASHTAG_CLASS: &str = "tweet-url hashtag";

/// Default CSS class for auto-linked cashtag URLs
pub const DEFAULT_CASHTAG_CLASS: &str = "tweet-url cashtag";

/// Default href base for username links
pub const DEFAULT_USERNAME_URL_BASE: &str = "https://twitter.com/";

/// Default href base for list links
pub const DEFAULT_LIST_URL_BASE: &str = "https://twitter.com/";

/// Default href base for hashtag links
pub const DEFAULT_HASHTAG_URL_BASE: &str = "https://twitter.com/search?q=%23";

/// Default href base for cashtag links
pub const DEFAULT_CASHTAG_URL_BASE: &str = "https://twitter.com/search?q=%24";

/// Default attributes for the invisible span wrapping elided URL parts
pub const DEFAULT_INVISIBLE_TAG_ATTRS: &str = "style='position:absolute;left:-9999px;'";

type Attributes = Vec<(String, String)>;

/// Callback rewriting the rendered inner text of a matched entity.
/// Returning None keeps the default text.
pub type TextRewriter = Box<dyn Fn(&Entity, &str) -> Option<String>>;

/// A tweak applied to each rendered link, in list order.
pub enum Modifier {
    /// Add one attribute to links of the given entity types.
    AddAttribute {
        entity_types: Vec<EntityType>,
        key: String,
        value: String,
    },
    /// Replace the computed CSS class.
    ReplaceClass { class: String },
    /// Rewrite the rendered link text through a callback.
    RewriteText(TextRewriter),
}

/// Adds HTML links to URL, hashtag, mention, and cashtag references in
/// tweet text.
///
/// # Example
///
/// ```
/// use chirp_render::Autolinker;
///
/// let linker = Autolinker::new(false);
/// let html = linker.autolink_hashtags("great #rust talk");
/// assert!(html.contains("href=\"https://twitter.com/search?q=%23rust\""));
/// ```
pub struct Autolinker {
    pub no_follow: bool,
    pub url_class: String,
    pub url_target: String,
    pub symbol_tag: String,
    pub text_with_symbol_tag: String,
    pub list_class: String,
    pub username_class: String,
    pub hashtag_class: String,
    pub cashtag_class: String,
    pub username_url_base: String,
    pub list_url_base: String,
    pub hashtag_url_base: String,
    pub cashtag_url_base: String,
    pub invisible_tag_attrs: String,
    pub username_include_symbol: bool,
    pub modifiers: Vec<Modifier>,
    extractor: Extractor,
}

impl Default for Autolinker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Autolinker {
    /// An autolinker with the platform's default classes and URL bases.
    /// Scheme-less URLs are left unlinked, as the platform renders them.
    pub fn new(no_follow: bool) -> Self {
        let mut extractor = Extractor::new();
        extractor.set_extract_url_without_protocol(false);
        Self {
            no_follow,
            url_class: String::new(),
            url_target: String::new(),
            symbol_tag: String::new(),
            text_with_symbol_tag: String::new(),
            list_class: DEFAULT_LIST_CLASS.to_string(),
            username_class: DEFAULT_USERNAME_CLASS.to_string(),
            hashtag_class: DEFAULT_HASHTAG_CLASS.to_string(),
            cashtag_class: DEFAULT_CASHTAG_CLASS.to_string(),
            username_url_base: DEFAULT_USERNAME_URL_BASE.to_string(),
            list_url_base: DEFAULT_LIST_URL_BASE.to_string(),
            hashtag_url_base: DEFAULT_HASHTAG_URL_BASE.to_string(),
            cashtag_url_base: DEFAULT_CASHTAG_URL_BASE.to_string(),
            invisible_tag_attrs: DEFAULT_INVISIBLE_TAG_ATTRS.to_string(),
            username_include_symbol: false,
            modifiers: Vec::new(),
            extractor,
        }
    }

    /// Auto-link every entity category. Angle brackets in the input are
    /// escaped before extraction so markup cannot leak through.
    pub fn autolink(&self, text: &str) -> String {
        let escaped = escape_brackets(text);
        let entities = self.extractor.extract_entities_with_indices(&escaped);
        self.autolink_entities(&escaped, &entities)
    }

    /// Auto-link only `@username` and `@username/list` references.
    pub fn autolink_usernames_and_lists(&self, text: &str) -> String {
        let entities = self.extractor.extract_mentions_or_lists_with_indices(text);
        self.autolink_entities(text, &entities)
    }

    /// Auto-link only `#hashtag` references.
    pub fn autolink_hashtags(&self, text: &str) -> String {
        let entities = self.extractor.extract_hashtags_with_indices(text);
        self.autolink_entities(text, &entities)
    }

    /// Auto-link only URLs with protocol.
    pub fn autolink_urls(&self, text: &str) -> String {
        let entities = self.extractor.extract_urls_with_indices(text);
        self.autolink_entities(text, &entities)
    }

    /// Auto-link only `$cashtag` references.
    pub fn autolink_cashtags(&self, text: &str) -> String {
        let entities = self.extractor.extract_cashtags_with_indices(text);
        self.autolink_entities(text, &entities)
    }

    /// Render `text` with the given entity list (sorted, non-overlapping)
    /// wrapped in anchors. Text outside entities is copied as-is.
    pub fn autolink_entities(&self, text: &str, entities: &[Entity]) -> String {
        log::debug!("autolinking {} entities", entities.len());
        let mut buf = String::with_capacity(text.len() * 2);
        let mut cursor = Utf16Cursor::new(text);
        let mut byte_offset = 0usize;

        for entity in entities {
            let start = cursor.byte_at(entity.start);
            buf.push_str(&text[byte_offset..start]);
            let end = cursor.byte_at(entity.end);

            match entity.entity_type {
                EntityType::Url => self.link_to_url(entity, &mut buf),
                EntityType::Hashtag => self.link_to_hashtag(entity, text, start, &mut buf),
                EntityType::Mention | EntityType::MentionOrList => {
                    self.link_to_mention_or_list(entity, text, start, &mut buf)
                }
                EntityType::Cashtag => self.link_to_cashtag(entity, &mut buf),
            }
            byte_offset = end;
        }
        buf.push_str(&text[byte_offset..]);
        buf
    }

    fn link_to_url(&self, entity: &Entity, buf: &mut String) {
        let url = &entity.value;
        let mut link_text = escape_html(url);

        if !entity.display_url.is_empty() && !entity.expanded_url.is_empty() {
            // Render the expanded URL in hidden spans around the visible
            // display text, so copy-paste yields the full original URL
            // while the UI shows the shortened form. Ellipses live in
            // tco-ellipsis spans that an onCopy handler can hide.
            let display_sans_ellipses = entity.display_url.replace('\u{2026}', "");
            if let Some(idx) = entity.expanded_url.find(&display_sans_ellipses) {
                let before = &entity.expanded_url[..idx];
                let after = &entity.expanded_url[idx + display_sans_ellipses.len()..];
                let preceding = if entity.display_url.starts_with('\u{2026}') {
                    "\u{2026}"
                } else {
                    ""
                };
                let following = if entity.display_url.ends_with('\u{2026}') {
                    "\u{2026}"
                } else {
                    ""
                };
                let invisible = format!("<span {}>", self.invisible_tag_attrs);

                let mut sb = String::from("<span class='tco-ellipsis'>");
                sb.push_str(preceding);
                sb.push_str(&invisible);
                sb.push_str("&nbsp;</span></span>");
                sb.push_str(&invisible);
                sb.push_str(&escape_html(before));
                sb.push_str("</span>");
                sb.push_str("<span class='js-display-url'>");
                sb.push_str(&escape_html(&display_sans_ellipses));
                sb.push_str("</span>");
                sb.push_str(&invisible);
                sb.push_str(&escape_html(after));
                sb.push_str("</span>");
                sb.push_str("<span class='tco-ellipsis'>");
                sb.push_str(&invisible);
                sb.push_str("&nbsp;</span>");
                sb.push_str(following);
                sb.push_str("</span>");
                link_text = sb;
            } else {
                link_text = entity.display_url.clone();
            }
        }

        let mut attrs: Attributes = vec![("href".to_string(), url.clone())];
        if !self.url_class.is_empty() {
            attrs.push(("class".to_string(), self.url_class.clone()));
        }
        if !self.url_target.is_empty() {
            attrs.push(("target".to_string(), self.url_target.clone()));
        }
        self.emit_link(entity, &link_text, attrs, buf);
    }

    fn link_to_hashtag(&self, entity: &Entity, text: &str, start_byte: usize, buf: &mut String) {
        let hash = text[start_byte..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        let tag = &entity.value;

        let class = if contains_rtl(text) {
            format!("{} rtl", self.hashtag_class)
        } else {
            self.hashtag_class.clone()
        };
        let attrs: Attributes = vec![
            ("href".to_string(), format!("{}{}", self.hashtag_url_base, tag)),
            ("title".to_string(), format!("#{}", tag)),
            ("class".to_string(), class),
        ];
        self.emit_link_with_symbol(entity, &hash, tag, attrs, buf);
    }

    fn link_to_cashtag(&self, entity: &Entity, buf: &mut String) {
        let tag = &entity.value;
        let attrs: Attributes = vec![
            ("href".to_string(), format!("{}{}", self.cashtag_url_base, tag)),
            ("title".to_string(), format!("${}", tag)),
            ("class".to_string(), self.cashtag_class.clone()),
        ];
        self.emit_link_with_symbol(entity, "$", tag, attrs, buf);
    }

    fn link_to_mention_or_list(
        &self,
        entity: &Entity,
        text: &str,
        start_byte: usize,
        buf: &mut String,
    ) {
        let at = text[start_byte..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        let mut name = entity.value.clone();

        let attrs: Attributes = if !entity.list_slug.is_empty() {
            name.push_str(&entity.list_slug);
            vec![
                ("class".to_string(), self.list_class.clone()),
                ("href".to_string(), format!("{}{}", self.list_url_base, name)),
            ]
        } else {
            vec![
                ("class".to_string(), self.username_class.clone()),
                ("href".to_string(), format!("{}{}", self.username_url_base, name)),
            ]
        };
        self.emit_link_with_symbol(entity, &at, &name, attrs, buf);
    }

    /// Wrap the sigil and body in their optional tags, then emit the
    /// anchor. Mentions keep the `@` outside the anchor unless
    /// `username_include_symbol` is set.
    fn emit_link_with_symbol(
        &self,
        entity: &Entity,
        symbol: &str,
        body: &str,
        attrs: Attributes,
        buf: &mut String,
    ) {
        let tagged_symbol = if self.symbol_tag.is_empty() {
            symbol.to_string()
        } else {
            format!("<{}>{}</{}>", self.symbol_tag, symbol, self.symbol_tag)
        };
        let body = escape_html(body);
        let tagged_body = if self.text_with_symbol_tag.is_empty() {
            body
        } else {
            format!(
                "<{}>{}</{}>",
                self.text_with_symbol_tag, body, self.text_with_symbol_tag
            )
        };

        let include_symbol = self.username_include_symbol
            || !(symbol.contains('@') || symbol.contains('\u{ff20}'));

        if include_symbol {
            self.emit_link(entity, &format!("{}{}", tagged_symbol, tagged_body), attrs, buf);
        } else {
            buf.push_str(&tagged_symbol);
            self.emit_link(entity, &tagged_body, attrs, buf);
        }
    }

    /// Apply modifiers and write the final anchor element.
    fn emit_link(&self, entity: &Entity, link_text: &str, mut attrs: Attributes, buf: &mut String) {
        if self.no_follow {
            attrs.push(("rel".to_string(), "nofollow".to_string()));
        }

        for modifier in &self.modifiers {
            match modifier {
                Modifier::AddAttribute {
                    entity_types,
                    key,
                    value,
                } => {
                    if entity_types.contains(&entity.entity_type) {
                        attrs.push((key.clone(), value.clone()));
                    }
                }
                Modifier::ReplaceClass { class } => {
                    for (key, value) in attrs.iter_mut() {
                        if key == "class" {
                            *value = class.clone();
                        }
                    }
                }
                Modifier::RewriteText(_) => {}
            }
        }

        let mut text = link_text.to_string();
        for modifier in &self.modifiers {
            if let Modifier::RewriteText(callback) = modifier {
                if let Some(replacement) = callback(entity, &text) {
                    text = replacement;
                }
            }
        }

        buf.push_str("<a");
        for (key, value) in &attrs {
            buf.push(' ');
            buf.push_str(&escape_html(key));
            buf.push_str("=\"");
            buf.push_str(&escape_html(value));
            buf.push('"');
        }
        buf.push('>');
        buf.push_str(&text);
        buf.push_str("</a>");
    }
}

/// Maps UTF-16 offsets back to byte offsets in a single forward pass.
struct Utf16Cursor<'a> {
    text: &'a str,
    byte_pos: usize,
    utf16_pos: i32,
}

impl<'a> Utf16Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            utf16_pos: 0,
        }
    }

    /// Byte offset of the given UTF-16 offset. Targets must not go
    /// backwards between calls.
    fn byte_at(&mut self, utf16_target: i32) -> usize {
        while self.utf16_pos < utf16_target {
            match self.text[self.byte_pos..].chars().next() {
                Some(c) => {
                    self.byte_pos += c.len_utf8();
                    self.utf16_pos += c.len_utf16() as i32;
                }
                None => break,
            }
        }
        self.byte_pos
    }
}

fn contains_rtl(s: &str) -> bool {
    s.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{05FF}' |
            '\u{0600}'..='\u{06FF}' |
            '\u{0750}'..='\u{077F}' |
            '\u{FE70}'..='\u{FEFF}'
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autolink_hashtag_defaults() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_hashtags("Check out #rust");
        assert!(html.contains("href=\"https://twitter.com/search?q=%23rust\""));
        assert!(html.contains("class=\"tweet-url hashtag\""));
        assert!(html.contains(">#rust</a>"));
        assert!(html.starts_with("Check out "));
    }

    #[test]
    fn test_autolink_mention_symbol_outside_anchor() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_usernames_and_lists("hello @bob");
        // The @ stays outside the anchor by default
        assert!(html.contains("@<a "));
        assert!(html.contains("href=\"https://twitter.com/bob\""));
        assert!(html.contains(">bob</a>"));
    }

    #[test]
    fn test_autolink_mention_include_symbol() {
        let mut linker = Autolinker::new(false);
        linker.username_include_symbol = true;
        let html = linker.autolink_usernames_and_lists("hello @bob");
        assert!(html.contains(">@bob</a>"));
    }

    #[test]
    fn test_autolink_list() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_usernames_and_lists("see @bob/rustaceans");
        assert!(html.contains("class=\"tweet-url list-slug\""));
        assert!(html.contains("href=\"https://twitter.com/bob/rustaceans\""));
    }

    #[test]
    fn test_autolink_cashtag() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_cashtags("buy $TWTR now");
        assert!(html.contains("href=\"https://twitter.com/search?q=%24TWTR\""));
        assert!(html.contains(">$TWTR</a>"));
    }

    #[test]
    fn test_autolink_url() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_urls("go to http://example.com now");
        assert!(html.contains("<a href=\"http://example.com\">http://example.com</a>"));
    }

    #[test]
    fn test_no_follow() {
        let linker = Autolinker::new(true);
        let html = linker.autolink_hashtags("#tag");
        assert!(html.contains("rel=\"nofollow\""));
    }

    #[test]
    fn test_autolink_escapes_brackets() {
        let linker = Autolinker::new(false);
        let html = linker.autolink("a <b> #tag");
        assert!(html.contains("a &lt;b&gt; "));
        assert!(html.contains(">#tag</a>"));
    }

    #[test]
    fn test_autolink_plain_text_unchanged() {
        let linker = Autolinker::new(false);
        assert_eq!(linker.autolink("just words here"), "just words here");
    }

    #[test]
    fn test_subset_entry_points_leave_other_entities_alone() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_hashtags("#tag @user");
        assert!(html.contains(">#tag</a>"));
        assert!(html.contains("@user"));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_add_attribute_modifier_scoped_to_hashtags() {
        let mut linker = Autolinker::new(false);
        linker.modifiers.push(Modifier::AddAttribute {
            entity_types: vec![EntityType::Hashtag],
            key: "data-custom".to_string(),
            value: "test".to_string(),
        });
        let html = linker.autolink("#test @mention");
        assert_eq!(html.matches("data-custom=\"test\"").count(), 1);
        let anchor_with_attr = html
            .split("<a ")
            .find(|chunk| chunk.contains("data-custom"))
            .unwrap();
        assert!(anchor_with_attr.contains("%23test"));
    }

    #[test]
    fn test_add_attribute_modifier_multiple_types() {
        let mut linker = Autolinker::new(false);
        linker.modifiers.push(Modifier::AddAttribute {
            entity_types: vec![EntityType::Hashtag, EntityType::Mention],
            key: "data-tracked".to_string(),
            value: "true".to_string(),
        });
        let html = linker.autolink("#test @user http://example.com");
        assert_eq!(html.matches("data-tracked=\"true\"").count(), 2);
    }

    #[test]
    fn test_replace_class_modifier() {
        let mut linker = Autolinker::new(false);
        linker
            .modifiers
            .push(Modifier::ReplaceClass {
                class: "my-custom-class".to_string(),
            });
        let html = linker.autolink_hashtags("#test");
        assert!(html.contains("class=\"my-custom-class\""));
        assert!(!html.contains("tweet-url hashtag"));
    }

    #[test]
    fn test_rewrite_text_modifier() {
        let mut linker = Autolinker::new(false);
        linker.modifiers.push(Modifier::RewriteText(Box::new(
            |entity: &Entity, _text: &str| {
                (entity.entity_type == EntityType::Hashtag).then(|| "CUSTOM".to_string())
            },
        )));
        let html = linker.autolink("#test @user");
        assert!(html.contains(">CUSTOM</a>"));
        assert!(html.contains(">user</a>"));
    }

    #[test]
    fn test_modifier_order_attribute_then_class_then_text() {
        let mut linker = Autolinker::new(false);
        linker.modifiers.push(Modifier::AddAttribute {
            entity_types: vec![EntityType::Hashtag],
            key: "data-x".to_string(),
            value: "1".to_string(),
        });
        linker.modifiers.push(Modifier::ReplaceClass {
            class: "late".to_string(),
        });
        let html = linker.autolink_hashtags("#t");
        assert!(html.contains("data-x=\"1\""));
        assert!(html.contains("class=\"late\""));
    }

    #[test]
    fn test_display_and_expanded_url_rendering() {
        let linker = Autolinker::new(false);
        let entity = Entity::new(EntityType::Url, "https://t.co/xyzabc", 3, 22)
            .with_urls("\u{2026}nname.com/foo", "http://longdomainname.com/foo");
        let text = "hi https://t.co/xyzabc";
        let html = linker.autolink_entities(text, &[entity]);
        assert!(html.contains("class='tco-ellipsis'"));
        assert!(html.contains("class='js-display-url'"));
        assert!(html.contains("nname.com/foo"));
        assert!(html.contains("href=\"https://t.co/xyzabc\""));
    }

    #[test]
    fn test_utf16_offsets_with_astral_chars() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_hashtags("\u{10400} #tag done");
        assert!(html.contains('\u{10400}'));
        assert!(html.contains(">#tag</a>"));
        assert!(html.ends_with(" done"));
    }

    #[test]
    fn test_rtl_class_suffix() {
        let linker = Autolinker::new(false);
        let html = linker.autolink_hashtags("#\u{05e9}\u{05dc}\u{05d5}\u{05dd}");
        assert!(html.contains("class=\"tweet-url hashtag rtl\""));
    }
}
