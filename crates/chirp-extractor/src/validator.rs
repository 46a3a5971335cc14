//! Boolean validity checks over tweets and entity-shaped tokens.

use crate::extract::Extractor;
use crate::parse;
use crate::url::{match_protocol_url, match_url_without_protocol};
use chirp_config::Configuration;

/// The maximum weighted tweet length under the default configuration.
pub const MAX_TWEET_LENGTH: i32 = 280;

/// Yes/no policy checks built on the extractor and the weighted-length
/// parser.
///
/// The short-URL lengths are stored configuration for callers doing
/// their own length math; the validator itself never substitutes URLs.
pub struct Validator {
    short_url_length: i32,
    short_url_length_https: i32,
    config: Configuration,
    extractor: Extractor,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator using the default (v3) configuration.
    pub fn new() -> Self {
        Self::with_config(Configuration::default())
    }

    /// A validator using the supplied configuration.
    pub fn with_config(config: Configuration) -> Self {
        Self {
            short_url_length: 23,
            short_url_length_https: 23,
            config,
            extractor: Extractor::new(),
        }
    }

    /// Whether the text is a valid tweet under this configuration.
    pub fn is_valid_tweet(&self, text: &str) -> bool {
        parse(text, &self.config, false).is_valid
    }

    /// Whether the whole input is exactly one `@username` token.
    pub fn is_valid_username(&self, text: &str) -> bool {
        if !text.starts_with('@') && !text.starts_with('\u{ff20}') {
            return false;
        }
        let mentions = self.extractor.extract_mentioned_screennames(text);
        mentions.len() == 1 && mentions[0].chars().count() == text.chars().count() - 1
    }

    /// Whether the whole input is exactly one `@username/list` token.
    pub fn is_valid_list(&self, text: &str) -> bool {
        if !text.starts_with('@') && !text.starts_with('\u{ff20}') {
            return false;
        }
        let lists = self.extractor.extract_mentions_or_lists_with_indices(text);
        if lists.len() != 1 {
            return false;
        }
        let list = &lists[0];
        !list.list_slug.is_empty()
            && list.start == 0
            && list.end as usize == text.chars().map(char::len_utf16).sum::<usize>()
    }

    /// Whether the whole input is exactly one `#hashtag` token.
    pub fn is_valid_hashtag(&self, text: &str) -> bool {
        if !text.starts_with('#') && !text.starts_with('\u{ff03}') {
            return false;
        }
        let hashtags = self.extractor.extract_hashtags(text);
        hashtags.len() == 1 && hashtags[0].chars().count() == text.chars().count() - 1
    }

    /// Whether the whole input is a single URL with protocol.
    pub fn is_valid_url(&self, text: &str) -> bool {
        !text.is_empty() && match_protocol_url(text) == Some(text.len())
    }

    /// Whether the whole input is a single URL, scheme not required.
    pub fn is_valid_url_without_protocol(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match_protocol_url(text) == Some(text.len())
            || match_url_without_protocol(text) == Some(text.len())
    }

    /// The maximum weighted tweet length.
    pub fn get_max_tweet_length(&self) -> i32 {
        MAX_TWEET_LENGTH
    }

    /// The configured length a wrapped `http` URL counts for.
    pub fn get_short_url_length(&self) -> i32 {
        self.short_url_length
    }

    /// Set the length a wrapped `http` URL counts for.
    pub fn set_short_url_length(&mut self, value: i32) {
        self.short_url_length = value;
    }

    /// The configured length a wrapped `https` URL counts for.
    pub fn get_short_url_length_https(&self) -> i32 {
        self.short_url_length_https
    }

    /// Set the length a wrapped `https` URL counts for.
    pub fn set_short_url_length_https(&mut self, value: i32) {
        self.short_url_length_https = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tweet_invalid() {
        assert!(!Validator::new().is_valid_tweet(""));
    }

    #[test]
    fn test_simple_tweet_valid() {
        assert!(Validator::new().is_valid_tweet("hello world"));
    }

    #[test]
    fn test_280_char_boundary() {
        let v = Validator::new();
        assert!(v.is_valid_tweet(&"a".repeat(280)));
        assert!(!v.is_valid_tweet(&"a".repeat(281)));
    }

    #[test]
    fn test_invalid_char_tweet() {
        assert!(!Validator::new().is_valid_tweet("no bom\u{feff} allowed"));
    }

    #[test]
    fn test_valid_username() {
        let v = Validator::new();
        assert!(v.is_valid_username("@user"));
        assert!(v.is_valid_username("@user_123"));
        assert!(!v.is_valid_username("user"));
        assert!(!v.is_valid_username("@user extra"));
        assert!(!v.is_valid_username("@"));
        assert!(!v.is_valid_username(""));
    }

    #[test]
    fn test_valid_list() {
        let v = Validator::new();
        assert!(v.is_valid_list("@user/mylist"));
        assert!(v.is_valid_list("@user/my-list_2"));
        assert!(!v.is_valid_list("@user"));
        assert!(!v.is_valid_list("@user/mylist extra"));
        assert!(!v.is_valid_list("user/mylist"));
    }

    #[test]
    fn test_valid_hashtag() {
        let v = Validator::new();
        assert!(v.is_valid_hashtag("#tag"));
        assert!(v.is_valid_hashtag("\u{ff03}tag"));
        assert!(!v.is_valid_hashtag("#123"));
        assert!(!v.is_valid_hashtag("tag"));
        assert!(!v.is_valid_hashtag("#tag stuff"));
    }

    #[test]
    fn test_valid_url() {
        let v = Validator::new();
        assert!(v.is_valid_url("http://example.com"));
        assert!(v.is_valid_url("https://example.com/path?q=1"));
        assert!(!v.is_valid_url("example.com"));
        assert!(!v.is_valid_url("http://example.com and text"));
        assert!(!v.is_valid_url(""));
    }

    #[test]
    fn test_valid_url_without_protocol() {
        let v = Validator::new();
        assert!(v.is_valid_url_without_protocol("example.com"));
        assert!(v.is_valid_url_without_protocol("http://example.com"));
        assert!(!v.is_valid_url_without_protocol("not a url"));
    }

    #[test]
    fn test_short_url_length_knobs() {
        let mut v = Validator::new();
        assert_eq!(v.get_short_url_length(), 23);
        assert_eq!(v.get_short_url_length_https(), 23);
        v.set_short_url_length(20);
        v.set_short_url_length_https(21);
        assert_eq!(v.get_short_url_length(), 20);
        assert_eq!(v.get_short_url_length_https(), 21);
        assert_eq!(v.get_max_tweet_length(), 280);
    }
}
