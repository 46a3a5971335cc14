//! Chirp Extractor
//!
//! Entity extraction and weighted-length parsing for tweet text.
//!
//! # Overview
//!
//! - [`Extractor`] - entity extraction with UTF-16 indices
//! - [`ValidatingExtractor`] - extraction plus [`ParseResult`] data
//! - [`Validator`] - boolean validity checks
//! - [`parse`] - one-call weighted-length parsing
//!
//! # Example
//!
//! ```
//! use chirp_config::Configuration;
//! use chirp_extractor::parse;
//!
//! let config = Configuration::default();
//! let result = parse("Hello #world", &config, true);
//! assert!(result.is_valid);
//! assert_eq!(result.weighted_length, 12);
//! ```

mod cashtag;
mod chars;
mod emoji;
mod extract;
mod hashtag;
mod mention;
mod scan;
mod tlds;
mod url;
mod validating;
mod validator;
mod weights;

pub use extract::Extractor;
pub use url::MAX_URL_LENGTH;
pub use validating::{ExtractResult, MentionResult, ValidatingExtractor};
pub use validator::{Validator, MAX_TWEET_LENGTH};

use chirp_config::Configuration;
use chirp_core::ParseResult;

/// Parse `text` against `config` and report its weighted length,
/// permillage, validity, and text ranges.
///
/// With `weight_urls`, every URL entity is charged the configured
/// transformed URL length instead of its literal characters. The input
/// is NFC-normalized first; ranges refer to the original text.
pub fn parse(text: &str, config: &Configuration, weight_urls: bool) -> ParseResult {
    let mut extractor = ValidatingExtractor::new(config);
    let input = extractor.prep_input(text);
    if weight_urls {
        extractor.extract_urls_with_indices(&input).parse_results
    } else {
        extractor.extract_scan(&input).parse_results
    }
}
