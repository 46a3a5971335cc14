//! Weighted-length accounting.
//!
//! [`TextMetrics`] accumulates the weighted count, the total UTF-16
//! offset, and the prefix of the text that still fits the configured
//! limit, as the validating extractor walks the text between and
//! through entity spans.

use chirp_config::Configuration;
use std::iter::Peekable;
use std::str::CharIndices;

/// How a stretch of text is charged against the weighted budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackAction {
    /// Per-code-point weights from the configuration table
    Text,
    /// Offset only; the caller charges the sequence once
    Emoji,
    /// Offset only; the whole span is charged the transformed URL length
    Url,
}

pub(crate) struct TextMetrics<'c> {
    pub is_valid: bool,
    pub weighted_count: i32,
    pub offset: i32,
    pub valid_offset: i32,
    scaled_max: i32,
    config: &'c Configuration,
}

impl<'c> TextMetrics<'c> {
    pub(crate) fn new(config: &'c Configuration) -> Self {
        Self {
            is_valid: true,
            weighted_count: 0,
            offset: 0,
            valid_offset: 0,
            scaled_max: config.max_weighted_tweet_length * config.scale,
            config,
        }
    }

    /// Charge one emoji sequence at the default weight.
    pub(crate) fn charge_emoji_sequence(&mut self) {
        self.weighted_count += self.config.default_weight;
    }

    /// The valid range only grows while the running weight fits the
    /// scaled limit and no invalid character was seen.
    fn add_offset(&mut self, units: i32) {
        self.offset += units;
        if self.is_valid && self.weighted_count <= self.scaled_max {
            self.valid_offset += units;
        }
    }

    fn track_text(&mut self, c: char) {
        self.weighted_count += self.config.weight_for(c as i32);
        self.add_offset(c.len_utf16() as i32);
    }

    /// Walk the iterator up to `byte_limit`, charging characters per
    /// `action`. Returns the UTF-16 units passed over.
    pub(crate) fn scan_to(
        &mut self,
        iter: &mut Peekable<CharIndices>,
        byte_limit: usize,
        action: TrackAction,
    ) -> i32 {
        let mut units = 0;
        while let Some((pos, _)) = iter.peek() {
            if *pos >= byte_limit {
                break;
            }
            let (_, c) = iter.next().expect("peeked");
            units += c.len_utf16() as i32;
            match action {
                TrackAction::Text => self.track_text(c),
                TrackAction::Emoji => self.add_offset(c.len_utf16() as i32),
                TrackAction::Url => {}
            }
        }

        if action == TrackAction::Url {
            self.weighted_count += self.config.transformed_url_length * self.config.scale;
            self.add_offset(units);
        }
        units
    }
}
