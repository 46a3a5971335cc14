//! Extraction with weighted-length validation in one pass.

use crate::chars::utf16_len;
use crate::extract::{entity_from_span, Extractor, KindFilter};
use crate::scan::{scan, RawKind};
use crate::weights::{TextMetrics, TrackAction};
use chirp_config::Configuration;
use chirp_core::{Entity, ParseResult, Range};
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Entities plus validation data for the whole input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractResult {
    pub parse_results: ParseResult,
    pub entities: Vec<Entity>,
}

/// A reply mention plus validation data for the whole input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionResult {
    pub parse_results: ParseResult,
    pub mention: Option<Entity>,
}

/// An extractor that also computes [`ParseResult`] validation data.
///
/// Call [`ValidatingExtractor::prep_input`] first to NFC-normalize the
/// text and record its pre-normalization length; the reported ranges
/// then refer to the original input. Extracting without `prep_input`
/// treats the text as already normalized.
///
/// # Example
///
/// ```
/// use chirp_config::Configuration;
/// use chirp_extractor::ValidatingExtractor;
///
/// let config = Configuration::default();
/// let mut extractor = ValidatingExtractor::new(&config);
/// let text = extractor.prep_input("hello @world");
/// let result = extractor.extract_mentioned_screennames_with_indices(&text);
/// assert!(result.parse_results.is_valid);
/// assert_eq!(result.entities[0].value, "world");
/// ```
pub struct ValidatingExtractor<'c> {
    config: &'c Configuration,
    extract_url_without_protocol: bool,
    original_utf16_len: Option<i32>,
}

impl<'c> ValidatingExtractor<'c> {
    /// Create a validating extractor borrowing the configuration.
    pub fn new(config: &'c Configuration) -> Self {
        Self {
            config,
            extract_url_without_protocol: true,
            original_utf16_len: None,
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

    /// Normalize the input to NFC and record its original length.
    /// Idempotent: normalizing an already-normalized string returns it
    /// unchanged.
    pub fn prep_input(&mut self, text: &str) -> String {
        self.original_utf16_len = Some(utf16_len(text));
        if is_nfc(text) {
            text.to_string()
        } else {
            text.nfc().collect()
        }
    }

    /// Extract URLs and validate, weighting each URL at the configured
    /// transformed length.
    pub fn extract_urls_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::urls(self.extract_url_without_protocol))
    }

    /// Extract hashtags and validate.
    pub fn extract_hashtags_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::hashtags())
    }

    /// Extract cashtags and validate.
    pub fn extract_cashtags_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::cashtags())
    }

    /// Extract plain mentions and validate.
    pub fn extract_mentioned_screennames_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::mentions())
    }

    /// Extract mentions and lists and validate.
    pub fn extract_mentions_or_lists_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::mentions_or_lists())
    }

    /// Extract every entity category and validate.
    pub fn extract_entities_with_indices(&self, text: &str) -> ExtractResult {
        self.extract(
            text,
            KindFilter::entities(self.extract_url_without_protocol),
        )
    }

    /// Validate without extracting anything. URLs weigh their literal
    /// characters here.
    pub fn extract_scan(&self, text: &str) -> ExtractResult {
        self.extract(text, KindFilter::none())
    }

    /// Extract the reply username and validate the whole text.
    pub fn extract_reply_username(&self, text: &str) -> MentionResult {
        let parse_results = self.extract_scan(text).parse_results;
        let mut plain = Extractor::new();
        plain.set_extract_url_without_protocol(self.extract_url_without_protocol);
        MentionResult {
            parse_results,
            mention: plain.extract_reply_username(text),
        }
    }

    fn extract(&self, text: &str, filter: KindFilter) -> ExtractResult {
        if text.is_empty() {
            return ExtractResult {
                parse_results: ParseResult::empty(),
                entities: Vec::new(),
            };
        }

        let spans = scan(text);
        let mut iter = text.char_indices().peekable();
        let mut metrics = TextMetrics::new(self.config);
        let mut entities = Vec::new();
        let mut cursor = 0i32;

        for span in &spans {
            cursor += metrics.scan_to(&mut iter, span.start, TrackAction::Text);
            match span.kind {
                RawKind::Invalid => {
                    // The character itself is weighted as ordinary text
                    // on the way to the next span.
                    metrics.is_valid = false;
                }
                RawKind::Emoji if self.config.emoji_parsing_enabled => {
                    metrics.charge_emoji_sequence();
                    cursor += metrics.scan_to(&mut iter, span.end, TrackAction::Emoji);
                }
                kind if filter.accepts(kind) => {
                    let action = match kind {
                        RawKind::Url | RawKind::UrlNoProtocol => TrackAction::Url,
                        _ => TrackAction::Text,
                    };
                    let units = metrics.scan_to(&mut iter, span.end, action);
                    entities.push(entity_from_span(text, span, cursor, cursor + units));
                    cursor += units;
                }
                _ => {
                    cursor += metrics.scan_to(&mut iter, span.end, TrackAction::Text);
                }
            }
        }
        metrics.scan_to(&mut iter, text.len(), TrackAction::Text);

        let normalization_offset = self.original_utf16_len.unwrap_or(metrics.offset) - metrics.offset;
        let weighted_length = metrics.weighted_count / self.config.scale;
        let is_valid = metrics.is_valid
            && weighted_length > 0
            && weighted_length <= self.config.max_weighted_tweet_length;
        let permillage = weighted_length * 1000 / self.config.max_weighted_tweet_length;

        ExtractResult {
            parse_results: ParseResult::new(
                weighted_length,
                permillage,
                is_valid,
                Range::new(0, metrics.offset + normalization_offset - 1),
                Range::new(0, metrics.valid_offset + normalization_offset - 1),
            ),
            entities,
        }
    }
}
