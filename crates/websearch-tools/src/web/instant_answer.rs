//! Instant-answer payload model and normalization
//!
//! The API returns one loosely shaped object. Three optional parts of it
//! carry usable hits, consumed in a fixed order:
//!
//! 1. the abstract (`Abstract`, `Heading`, `AbstractURL`, `AbstractSource`)
//! 2. `RelatedTopics`
//! 3. `Results`
//!
//! Decoding is lenient: a string field holding something else counts as
//! absent, and a list field holding something other than a list counts as
//! empty. A body that is `null` or a bare scalar is rejected.

use crate::types::SearchResultItem;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Maximum title length, in characters, for titles cut from topic text
pub const TITLE_MAX_CHARS: usize = 80;

/// Title used for the abstract when the payload has no heading
pub const DEFAULT_ANSWER_TITLE: &str = "DuckDuckGo Answer";

const TOPIC_TITLE_DELIMITER: &str = " - ";

/// The parts of an instant-answer body this crate reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstantAnswer {
    /// Direct answer text
    #[serde(rename = "Abstract", default, deserialize_with = "lenient_string")]
    pub abstract_text: Option<String>,

    /// Heading for the direct answer
    #[serde(rename = "Heading", default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,

    /// Link for the direct answer
    #[serde(rename = "AbstractURL", default, deserialize_with = "lenient_string")]
    pub abstract_url: Option<String>,

    /// Source name for the direct answer, used as a fallback link
    #[serde(rename = "AbstractSource", default, deserialize_with = "lenient_string")]
    pub abstract_source: Option<String>,

    /// Related topics, possibly interleaved with named groups
    #[serde(rename = "RelatedTopics", default, deserialize_with = "lenient_seq")]
    pub related_topics: Vec<Topic>,

    /// Direct external results
    #[serde(rename = "Results", default, deserialize_with = "lenient_seq")]
    pub results: Vec<Topic>,
}

/// An entry of `RelatedTopics` or `Results`
///
/// Grouped entries carry `Name` and `Topics` instead of `Text`/`FirstURL`.
/// Groups are kept for inspection but never contribute hits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Topic {
    /// Entry text, usually `"<title> - <description>"`
    #[serde(rename = "Text", default, deserialize_with = "lenient_string")]
    pub text: Option<String>,

    /// Entry link
    #[serde(rename = "FirstURL", default, deserialize_with = "lenient_string")]
    pub first_url: Option<String>,

    /// Group name
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Group members
    #[serde(rename = "Topics", default, deserialize_with = "lenient_seq")]
    pub topics: Vec<Topic>,
}

impl Topic {
    /// `(text, url)` when both are present and non-empty
    fn into_link(self) -> Option<(String, String)> {
        Some((non_empty(self.text)?, non_empty(self.first_url)?))
    }
}

/// Build the result list for `limit`.
///
/// The abstract is always taken when present, so the list may hold
/// `limit + 1` items. Topics and results are only appended while fewer than
/// `limit` items are collected. An empty list becomes the single
/// [`SearchResultItem::no_results`] placeholder.
#[must_use]
pub fn normalize(answer: InstantAnswer, limit: i64) -> Vec<SearchResultItem> {
    let mut items = Vec::new();

    if let Some(snippet) = non_empty(answer.abstract_text) {
        items.push(SearchResultItem {
            title: non_empty(answer.heading).unwrap_or_else(|| DEFAULT_ANSWER_TITLE.to_string()),
            url: non_empty(answer.abstract_url)
                .or_else(|| non_empty(answer.abstract_source))
                .unwrap_or_default(),
            snippet,
        });
    }

    for (text, url) in answer.related_topics.into_iter().filter_map(Topic::into_link) {
        if !has_room(&items, limit) {
            break;
        }
        items.push(SearchResultItem {
            title: topic_title(&text),
            url,
            snippet: text,
        });
    }

    for (text, url) in answer.results.into_iter().filter_map(Topic::into_link) {
        if !has_room(&items, limit) {
            break;
        }
        items.push(SearchResultItem {
            title: text.clone(),
            url,
            snippet: text,
        });
    }

    if items.is_empty() {
        items.push(SearchResultItem::no_results());
    }

    items
}

/// Text before the first `" - "`, cut to [`TITLE_MAX_CHARS`] characters
#[must_use]
pub fn topic_title(text: &str) -> String {
    let head = text
        .split_once(TOPIC_TITLE_DELIMITER)
        .map_or(text, |(head, _)| head);
    head.chars().take(TITLE_MAX_CHARS).collect()
}

fn has_room(items: &[SearchResultItem], limit: i64) -> bool {
    i64::try_from(items.len()).is_ok_and(|len| len < limit)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| T::deserialize(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
