//! Search request and result types

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result count used when the caller gives none
pub const DEFAULT_LIMIT: i64 = 5;

/// Upper bound applied to caller-supplied limits
pub const MAX_LIMIT: i64 = 10;

/// Title of the placeholder item returned when nothing matched
pub const NO_RESULTS_TITLE: &str = "No results";

/// Snippet of the placeholder item returned when nothing matched
pub const NO_RESULTS_SNIPPET: &str = "No results found for the query.";

/// One validated `search_web` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query, never empty
    pub query: String,
    /// Result cap, at most [`MAX_LIMIT`]
    pub limit: i64,
}

impl SearchQuery {
    /// Validate raw tool arguments.
    ///
    /// `limit` follows the "value or default" rule of the tool contract: a
    /// missing, `null`, `false`, zero, or empty-string limit becomes
    /// [`DEFAULT_LIMIT`]. Other values are read as numbers the way a loosely
    /// typed client would: `true` is 1, `"3"` is 3, and a non-numeric value
    /// such as `"abc"` admits no topic or direct-result entries (limit 0).
    /// Fractional limits round up, since `len < 3.5` admits the same lengths
    /// as `len < 4`. The result is capped at [`MAX_LIMIT`] but has no floor,
    /// so a negative limit reaches the search function unchanged.
    pub fn from_arguments(arguments: Option<&Map<String, Value>>) -> Result<Self, GatewayError> {
        let query = arguments
            .and_then(|args| args.get("query"))
            .and_then(Value::as_str)
            .filter(|q| !q.is_empty())
            .ok_or(GatewayError::InvalidQuery)?;

        let limit = coerce_limit(arguments.and_then(|args| args.get("limit"))).min(MAX_LIMIT);

        Ok(Self {
            query: query.to_string(),
            limit,
        })
    }
}

fn coerce_limit(value: Option<&Value>) -> i64 {
    let n = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return DEFAULT_LIMIT,
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(n) if n != 0.0 => n,
            _ => return DEFAULT_LIMIT,
        },
        Some(Value::String(s)) if s.is_empty() => return DEFAULT_LIMIT,
        Some(Value::String(s)) => match s.trim() {
            "" => 0.0,
            trimmed => trimmed.parse().unwrap_or(f64::NAN),
        },
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    };

    // NaN fails every `len < limit` check
    if n.is_nan() {
        0
    } else {
        n.ceil() as i64
    }
}

/// A single normalized search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Short title
    pub title: String,
    /// Link target, may be empty
    pub url: String,
    /// Longer descriptive text
    pub snippet: String,
}

impl SearchResultItem {
    /// Placeholder substituted when no source produced a usable item
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            title: NO_RESULTS_TITLE.to_string(),
            url: String::new(),
            snippet: NO_RESULTS_SNIPPET.to_string(),
        }
    }
}

/// Outcome of one search, serialized without a tag so both variants share
/// the `query` and `results` keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    /// Search ran; `count == results.len()`
    Success {
        /// Query as given
        query: String,
        /// Number of entries in `results`
        count: usize,
        /// Normalized hits
        results: Vec<SearchResultItem>,
    },
    /// Search failed at the transport or parsing stage
    Failure {
        /// Query as given
        query: String,
        /// Human-readable failure message
        error: String,
        /// Always empty
        results: Vec<SearchResultItem>,
    },
}

impl SearchResult {
    /// Successful result; `count` is derived from `results`
    #[must_use]
    pub fn success(query: impl Into<String>, results: Vec<SearchResultItem>) -> Self {
        Self::Success {
            query: query.into(),
            count: results.len(),
            results,
        }
    }

    /// Failed result with no items
    #[must_use]
    pub fn failure(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failure {
            query: query.into(),
            error: error.into(),
            results: Vec::new(),
        }
    }

    /// The query this result answers
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Success { query, .. } | Self::Failure { query, .. } => query,
        }
    }

    /// Result items (empty on failure)
    #[must_use]
    pub fn results(&self) -> &[SearchResultItem] {
        match self {
            Self::Success { results, .. } | Self::Failure { results, .. } => results,
        }
    }

    /// Failure message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Render the way the tool returns it: two-space indented JSON
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_query_is_required() {
        assert!(matches!(
            SearchQuery::from_arguments(None),
            Err(GatewayError::InvalidQuery)
        ));
        assert!(matches!(
            SearchQuery::from_arguments(Some(&args(json!({})))),
            Err(GatewayError::InvalidQuery)
        ));
    }

    #[test]
    fn test_query_must_be_non_empty_string() {
        for bad in [json!({"query": ""}), json!({"query": 42}), json!({"query": null})] {
            assert!(matches!(
                SearchQuery::from_arguments(Some(&args(bad))),
                Err(GatewayError::InvalidQuery)
            ));
        }
    }

    #[test]
    fn test_limit_defaults_to_five() {
        let q = SearchQuery::from_arguments(Some(&args(json!({"query": "rust"})))).unwrap();
        assert_eq!(q.query, "rust");
        assert_eq!(q.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_is_capped_at_ten() {
        let q = SearchQuery::from_arguments(Some(&args(json!({"query": "rust", "limit": 50}))))
            .unwrap();
        assert_eq!(q.limit, MAX_LIMIT);
    }

    #[test]
    fn test_falsy_limits_fall_back_to_default() {
        for limit in [json!(0), json!(null), json!(false), json!("")] {
            let q = SearchQuery::from_arguments(Some(&args(json!({"query": "q", "limit": limit}))))
                .unwrap();
            assert_eq!(q.limit, DEFAULT_LIMIT);
        }
    }

    #[test]
    fn test_loosely_typed_limits_are_coerced() {
        let cases = [
            (json!("3"), 3),
            (json!(" 7 "), 7),
            (json!("2.5"), 3),
            (json!("40"), MAX_LIMIT),
            (json!(true), 1),
            (json!("0"), 0),
            (json!("abc"), 0),
            (json!({"n": 3}), 0),
        ];
        for (limit, expected) in cases {
            let arguments = args(json!({"query": "q", "limit": limit.clone()}));
            let q = SearchQuery::from_arguments(Some(&arguments)).unwrap();
            assert_eq!(q.limit, expected, "limit {limit}");
        }
    }

    #[test]
    fn test_negative_limit_passes_through() {
        let q = SearchQuery::from_arguments(Some(&args(json!({"query": "q", "limit": -2}))))
            .unwrap();
        assert_eq!(q.limit, -2);
    }

    #[test]
    fn test_fractional_limit_rounds_up() {
        let q = SearchQuery::from_arguments(Some(&args(json!({"query": "q", "limit": 2.5}))))
            .unwrap();
        assert_eq!(q.limit, 3);
    }

    #[test]
    fn test_success_serialization_shape() {
        let result = SearchResult::success("rust", vec![SearchResultItem::no_results()]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "rust",
                "count": 1,
                "results": [{
                    "title": "No results",
                    "url": "",
                    "snippet": "No results found for the query."
                }]
            })
        );
    }

    #[test]
    fn test_failure_serialization_shape() {
        let result = SearchResult::failure("rust", "HTTP 500: Internal Server Error");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"query": "rust", "error": "HTTP 500: Internal Server Error", "results": []})
        );
        assert!(value.get("count").is_none());
    }

    #[test]
    fn test_pretty_json_parses_back_to_same_variant() {
        let failure = SearchResult::failure("q", "boom");
        let text = failure.to_pretty_json().unwrap();
        assert!(text.contains("\n  \"error\": \"boom\""));

        let parsed: SearchResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.error(), Some("boom"));
        assert_eq!(parsed.query(), "q");
    }
}
