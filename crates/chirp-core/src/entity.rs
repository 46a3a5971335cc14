//! Entity types produced by extraction.

use serde::{Deserialize, Serialize};

/// The category of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// A URL, with or without a scheme
    Url,
    /// A #hashtag
    Hashtag,
    /// An @username mention
    Mention,
    /// An @username/list-slug mention
    MentionOrList,
    /// A $CASHTAG stock symbol
    Cashtag,
}

/// A structurally recognized span in the analyzed text.
///
/// Entities returned from one extraction call are sorted by `start` and
/// pairwise non-overlapping. Indices are UTF-16 code units into the text
/// the extractor was handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The entity category
    pub entity_type: EntityType,
    /// Start offset, UTF-16 code units
    pub start: i32,
    /// End offset, UTF-16 code units (exclusive)
    pub end: i32,
    /// The matched text: sigil stripped for tags and mentions, scheme
    /// kept for URLs
    pub value: String,
    /// For list mentions, the slug including its leading slash
    /// (`"/the-list"`); empty otherwise
    pub list_slug: String,
    /// Presentation URL for shortened links; empty unless supplied
    pub display_url: String,
    /// Expanded URL for shortened links; empty unless supplied
    pub expanded_url: String,
}

impl Entity {
    /// Create an entity with no list slug or URL metadata.
    pub fn new(entity_type: EntityType, value: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            entity_type,
            start,
            end,
            value: value.into(),
            list_slug: String::new(),
            display_url: String::new(),
            expanded_url: String::new(),
        }
    }

    /// Create a list-mention entity.
    pub fn new_list(
        value: impl Into<String>,
        list_slug: impl Into<String>,
        start: i32,
        end: i32,
    ) -> Self {
        Self {
            entity_type: EntityType::MentionOrList,
            start,
            end,
            value: value.into(),
            list_slug: list_slug.into(),
            display_url: String::new(),
            expanded_url: String::new(),
        }
    }

    /// Attach display/expanded URLs to a URL entity.
    pub fn with_urls(mut self, display_url: impl Into<String>, expanded_url: impl Into<String>) -> Self {
        self.display_url = display_url.into();
        self.expanded_url = expanded_url.into();
        self
    }

    /// True for plain mentions and list mentions alike.
    pub fn is_mention(&self) -> bool {
        matches!(
            self.entity_type,
            EntityType::Mention | EntityType::MentionOrList
        )
    }
}
