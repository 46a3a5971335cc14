//! Versioned configuration presets.
//!
//! The three presets mirror the platform's published configuration
//! files. v1 is the classic 140-character config where every code point
//! weighs one unit. v2 raised the limit to 280 by double-weighting
//! everything outside a handful of dense-script ranges. v3 is v2 plus
//! emoji sequences counting as a single default-weight character.

use crate::{Configuration, WeightedRange};
use chirp_core::Range;

fn light_ranges() -> Vec<WeightedRange> {
    // Latin/Greek/Cyrillic/Hebrew/Arabic and general/currency punctuation
    // count single-weight under v2/v3.
    vec![
        WeightedRange {
            range: Range::new(0, 4351),
            weight: 100,
        },
        WeightedRange {
            range: Range::new(8192, 8205),
            weight: 100,
        },
        WeightedRange {
            range: Range::new(8208, 8223),
            weight: 100,
        },
        WeightedRange {
            range: Range::new(8242, 8247),
            weight: 100,
        },
    ]
}

/// The original 140-character configuration. No weighting table: every
/// code point counts for one.
pub fn config_v1() -> Configuration {
    Configuration {
        version: 1,
        max_weighted_tweet_length: 140,
        scale: 1,
        default_weight: 1,
        transformed_url_length: 23,
        emoji_parsing_enabled: false,
        ranges: Vec::new(),
    }
}

/// The 280-character configuration with weighted code-point ranges.
pub fn config_v2() -> Configuration {
    Configuration {
        version: 2,
        max_weighted_tweet_length: 280,
        scale: 100,
        default_weight: 200,
        transformed_url_length: 23,
        emoji_parsing_enabled: false,
        ranges: light_ranges(),
    }
}

/// v2 plus emoji sequence discounting: any recognized emoji sequence
/// counts once at the default weight, regardless of how many code
/// points compose it.
pub fn config_v3() -> Configuration {
    Configuration {
        version: 3,
        max_weighted_tweet_length: 280,
        scale: 100,
        default_weight: 200,
        transformed_url_length: 23,
        emoji_parsing_enabled: true,
        ranges: light_ranges(),
    }
}
