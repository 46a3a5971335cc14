//! Integration tests for the chirp workspace.
//!
//! These drive the full pipeline - configuration, extraction, weighted
//! validation, autolinking, and highlighting - the way an embedding
//! host would.

use chirp_config::{config_v1, config_v2, Configuration};
use chirp_core::{EntityType, Range};
use chirp_extractor::{parse, Extractor, ValidatingExtractor, Validator};
use chirp_render::{Autolinker, HitHighlighter, Modifier};

// =============================================================================
// Weighted-length parsing
// =============================================================================

#[test]
fn test_parse_simple_tweet() {
    let config = Configuration::default();
    let result = parse("This is a test.", &config, true);
    assert_eq!(result.weighted_length, 15);
    assert!(result.is_valid);
    assert_eq!(result.permillage, 15 * 1000 / 280);
    assert_eq!(result.display_text_range, Range::new(0, 14));
    assert_eq!(result.valid_text_range, Range::new(0, 14));
}

#[test]
fn test_parse_empty_is_invalid() {
    let config = Configuration::default();
    let result = parse("", &config, true);
    assert!(!result.is_valid);
    assert_eq!(result.weighted_length, 0);
}

#[test]
fn test_parse_280_boundary_default_config() {
    let config = Configuration::default();
    assert!(parse(&"a".repeat(280), &config, true).is_valid);
    assert!(!parse(&"a".repeat(281), &config, true).is_valid);
}

#[test]
fn test_parse_140_boundary_v1() {
    let config = config_v1();
    assert!(parse(&"a".repeat(140), &config, true).is_valid);
    assert!(!parse(&"a".repeat(141), &config, true).is_valid);
}

#[test]
fn test_cjk_halves_the_budget() {
    let config = Configuration::default();
    // 140 CJK characters weigh 280; 141 overflow.
    assert!(parse(&"\u{4e9c}".repeat(140), &config, true).is_valid);
    assert!(!parse(&"\u{4e9c}".repeat(141), &config, true).is_valid);
}

#[test]
fn test_url_weighting_is_flat() {
    let config = Configuration::default();
    let text = format!("a {}", "https://example.com/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    let result = parse(&text, &config, true);
    assert_eq!(result.weighted_length, 2 + 23);
}

#[test]
fn test_emoji_discount_only_in_v3() {
    let flag = "\u{1f1fa}\u{1f1f8}"; // regional indicator pair
    let v3 = Configuration::default();
    let v2 = config_v2();
    assert_eq!(parse(flag, &v3, true).weighted_length, 2);
    assert_eq!(parse(flag, &v2, true).weighted_length, 4);
}

#[test]
fn test_invalid_characters_reject_tweet() {
    let config = Configuration::default();
    assert!(!parse("hello \u{fffe} world", &config, true).is_valid);
    assert!(!parse("bom\u{feff}", &config, true).is_valid);
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn test_extract_all_entity_kinds() {
    let extractor = Extractor::new();
    let text = "RT @alice: #breaking $TWTR news at https://example.com/story and cnn.com";
    let entities = extractor.extract_entities_with_indices(text);
    let kinds: Vec<EntityType> = entities.iter().map(|e| e.entity_type).collect();
    assert_eq!(
        kinds,
        vec![
            EntityType::Mention,
            EntityType::Hashtag,
            EntityType::Cashtag,
            EntityType::Url,
            EntityType::Url,
        ]
    );
    assert_eq!(entities[0].value, "alice");
    assert_eq!(entities[1].value, "breaking");
    assert_eq!(entities[2].value, "TWTR");
    assert_eq!(entities[3].value, "https://example.com/story");
    assert_eq!(entities[4].value, "cnn.com");
}

#[test]
fn test_entities_sorted_and_non_overlapping() {
    let extractor = Extractor::new();
    let entities = extractor
        .extract_entities_with_indices("#a @b $CC http://d.com e.org #f @g");
    assert!(!entities.is_empty());
    for pair in entities.windows(2) {
        assert!(pair[0].start < pair[1].start);
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_url_suppresses_inner_hashtag_and_mention() {
    let extractor = Extractor::new();
    let text = "https://example.com/#fragment?user=@alice";
    assert!(extractor.extract_hashtags(text).is_empty());
    assert!(extractor.extract_mentioned_screennames(text).is_empty());
    assert_eq!(extractor.extract_urls(text).len(), 1);
}

#[test]
fn test_validating_extractor_returns_both() {
    let config = Configuration::default();
    let mut extractor = ValidatingExtractor::new(&config);
    let text = extractor.prep_input("hello @bob, meet @carol");
    let result = extractor.extract_mentioned_screennames_with_indices(&text);
    assert!(result.parse_results.is_valid);
    assert_eq!(result.parse_results.weighted_length, 23);
    assert_eq!(result.entities.len(), 2);
    assert_eq!((result.entities[0].start, result.entities[0].end), (6, 10));
}

#[test]
fn test_validating_extractor_nfc_equivalence() {
    let config = Configuration::default();

    let mut decomposed = ValidatingExtractor::new(&config);
    let text1 = decomposed.prep_input("re\u{0301}sume\u{0301} @user");
    let r1 = decomposed.extract_mentioned_screennames_with_indices(&text1);

    let mut precomposed = ValidatingExtractor::new(&config);
    let text2 = precomposed.prep_input("r\u{e9}sum\u{e9} @user");
    let r2 = precomposed.extract_mentioned_screennames_with_indices(&text2);

    assert_eq!(
        r1.parse_results.weighted_length,
        r2.parse_results.weighted_length
    );
    assert_eq!(r1.entities[0].value, r2.entities[0].value);
}

#[test]
fn test_reply_username_pipeline() {
    let config = Configuration::default();
    let extractor = ValidatingExtractor::new(&config);
    let result = extractor.extract_reply_username("@support I need help");
    assert_eq!(result.mention.unwrap().value, "support");
    assert!(result.parse_results.is_valid);

    let no_reply = extractor.extract_reply_username("I need help @support");
    assert!(no_reply.mention.is_none());
}

// =============================================================================
// Validator policy layer
// =============================================================================

#[test]
fn test_validator_end_to_end() {
    let validator = Validator::new();
    assert!(validator.is_valid_tweet("totally fine tweet"));
    assert!(!validator.is_valid_tweet(""));
    assert!(validator.is_valid_username("@jack"));
    assert!(validator.is_valid_list("@jack/founders"));
    assert!(validator.is_valid_hashtag("#launch"));
    assert!(validator.is_valid_url("https://twitter.com/"));
    assert!(validator.is_valid_url_without_protocol("twitter.com"));
}

// =============================================================================
// Autolinking
// =============================================================================

#[test]
fn test_autolink_everything() {
    let linker = Autolinker::new(false);
    let html = linker.autolink("#tag @user $TWTR http://example.com");
    assert_eq!(html.matches("<a ").count(), 4);
    assert!(html.contains("https://twitter.com/search?q=%23tag"));
    assert!(html.contains("https://twitter.com/user"));
    assert!(html.contains("https://twitter.com/search?q=%24TWTR"));
    assert!(html.contains("href=\"http://example.com\""));
}

#[test]
fn test_autolink_no_entities_roundtrip() {
    let linker = Autolinker::new(false);
    let text = "no entities in this text at all";
    assert_eq!(linker.autolink(text), text);
}

#[test]
fn test_autolink_attribute_modifier_spec_example() {
    let mut linker = Autolinker::new(false);
    linker.modifiers.push(Modifier::AddAttribute {
        entity_types: vec![EntityType::Hashtag],
        key: "data-custom".to_string(),
        value: "test".to_string(),
    });
    let html = linker.autolink("#test @mention");

    assert_eq!(html.matches("data-custom=\"test\"").count(), 1);
    // The attribute is on the hashtag anchor, not the mention anchor.
    let hashtag_anchor = html
        .split("<a ")
        .find(|chunk| chunk.contains("%23test"))
        .unwrap();
    assert!(hashtag_anchor.contains("data-custom=\"test\""));
    let mention_anchor = html
        .split("<a ")
        .find(|chunk| chunk.contains("twitter.com/mention"))
        .unwrap();
    assert!(!mention_anchor.contains("data-custom"));
}

// =============================================================================
// Highlighting
// =============================================================================

#[test]
fn test_highlight_roundtrip_empty_hits() {
    let highlighter = HitHighlighter::new();
    let text = "text with <markup> & stuff";
    assert_eq!(
        highlighter.highlight(text, &[]),
        "text with &lt;markup&gt; &amp; stuff"
    );
}

#[test]
fn test_highlight_search_hit() {
    let highlighter = HitHighlighter::new();
    assert_eq!(
        highlighter.highlight("say hello twice: hello", &[(4, 9), (17, 22)]),
        "say <em>hello</em> twice: <em>hello</em>"
    );
}

#[test]
fn test_highlight_is_independent_of_entities() {
    // Hits are arbitrary ranges; they do not need to line up with any
    // extracted entity.
    let highlighter = HitHighlighter::new();
    let html = highlighter.highlight("#tag in text", &[(2, 6)]);
    assert_eq!(html, "#t<em>ag i</em>n text");
}
