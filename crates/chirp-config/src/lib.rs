//! Chirp Config
//!
//! This crate holds the versioned weighting configuration that drives
//! the weighted-length parser, loadable from JSON files or strings.
//!
//! # Schema
//!
//! ```json
//! {
//!   "version": 3,
//!   "maxWeightedTweetLength": 280,
//!   "scale": 100,
//!   "defaultWeight": 200,
//!   "transformedURLLength": 23,
//!   "emojiParsingEnabled": true,
//!   "ranges": [
//!     { "range": { "start": 0, "end": 4351 }, "weight": 100 }
//!   ]
//! }
//! ```
//!
//! `transformedUrlLength` is accepted as an input alias for
//! `transformedURLLength`.
//!
//! # Example
//!
//! ```
//! use chirp_config::Configuration;
//!
//! let config = Configuration::default(); // the v3 preset
//! assert_eq!(config.max_weighted_tweet_length, 280);
//! ```

mod presets;

pub use presets::{config_v1, config_v2, config_v3};

use chirp_core::{ChirpError, Range, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A weight applied to an inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedRange {
    /// The covered code points, both ends inclusive
    pub range: Range,
    /// Weight per code point, in `scale` units
    pub weight: i32,
}

impl WeightedRange {
    /// Whether the range covers the given code point.
    pub fn contains(&self, code_point: i32) -> bool {
        code_point >= self.range.start && code_point <= self.range.end
    }
}

/// The weighting rules for one configuration version.
///
/// A pure value object: construct it from a preset or JSON, hand shared
/// references to parsers and validators. Nothing here is mutated during
/// a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Configuration version (1, 2, 3, or a custom number)
    pub version: i32,
    /// Maximum weighted length of a valid tweet
    pub max_weighted_tweet_length: i32,
    /// Divisor applied to weighted sums (weight units per character)
    pub scale: i32,
    /// Weight of code points not covered by any range
    pub default_weight: i32,
    /// Weight charged once per URL entity when URL weighting is active
    #[serde(rename = "transformedURLLength", alias = "transformedUrlLength")]
    pub transformed_url_length: i32,
    /// Whether emoji sequences are discounted to one default weight
    #[serde(default)]
    pub emoji_parsing_enabled: bool,
    /// Ordered, non-overlapping code-point weighting table
    pub ranges: Vec<WeightedRange>,
}

impl Default for Configuration {
    fn default() -> Self {
        presets::config_v3()
    }
}

impl Configuration {
    /// Return the preset for a published version number. Unknown
    /// versions fall back to the default (v3) preset.
    pub fn from_version(version: i32) -> Self {
        match version {
            1 => presets::config_v1(),
            2 => presets::config_v2(),
            _ => presets::config_v3(),
        }
    }

    /// Parse a configuration from a JSON string.
    ///
    /// Rejects malformed JSON and structurally invalid configurations
    /// (see [`Configuration::validate`]).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Configuration = serde_json::from_str(json)
            .map_err(|e| ChirpError::Config(format!("Parse error: {}", e)))?;
        config.validate()?;
        log::debug!("loaded configuration version {}", config.version);
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            ChirpError::Config(msg) => {
                ChirpError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Serialize back to the documented JSON schema.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChirpError::Config(format!("Serialization error: {}", e)))
    }

    /// Check the structural invariants: positive length limit and scale,
    /// non-negative weights, and a sorted, non-overlapping range table.
    pub fn validate(&self) -> Result<()> {
        if self.max_weighted_tweet_length <= 0 {
            return Err(ChirpError::Config(format!(
                "maxWeightedTweetLength must be positive, got {}",
                self.max_weighted_tweet_length
            )));
        }
        if self.scale <= 0 {
            return Err(ChirpError::Config(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if self.default_weight < 0 {
            return Err(ChirpError::Config(format!(
                "defaultWeight must be non-negative, got {}",
                self.default_weight
            )));
        }
        for wr in &self.ranges {
            if wr.weight < 0 {
                return Err(ChirpError::Config(format!(
                    "range weight must be non-negative, got {}",
                    wr.weight
                )));
            }
            if wr.range.end < wr.range.start {
                return Err(ChirpError::Config(format!(
                    "range [{}, {}] is inverted",
                    wr.range.start, wr.range.end
                )));
            }
        }
        for pair in self.ranges.windows(2) {
            if pair[1].range.start <= pair[0].range.end {
                return Err(ChirpError::Config(format!(
                    "ranges [{}, {}] and [{}, {}] overlap or are unsorted",
                    pair[0].range.start, pair[0].range.end, pair[1].range.start, pair[1].range.end
                )));
            }
        }
        Ok(())
    }

    /// The weight for a single code point: first containing range wins,
    /// otherwise the default weight.
    pub fn weight_for(&self, code_point: i32) -> i32 {
        for wr in &self.ranges {
            if wr.contains(code_point) {
                return wr.weight;
            }
        }
        self.default_weight
    }
}
