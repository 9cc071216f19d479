//! End-to-end tests for the `search_web` tool against a mocked instant-answer API
//!
//! Every test drives the public gateway with a real HTTP provider pointed at a
//! wiremock server, so argument validation, the request, decoding, and
//! normalization all run together.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{json, Value};
use websearch_config::SearchConfig;
use websearch_tools::{
    DuckDuckGoProvider, GatewayError, SearchResult, SearchResultItem, ToolGateway, TOOL_NAME,
};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> ToolGateway {
    let config = SearchConfig {
        endpoint: format!("{}/", server.uri()),
        ..Default::default()
    };
    let provider = DuckDuckGoProvider::from_config(&config).unwrap();
    ToolGateway::new(Arc::new(provider))
}

fn args(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

async fn mount_body(server: &MockServer, query: &str, body: Value) {
    Mock::given(method("GET"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_direct_results_keep_source_order() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        "TypeScript",
        json!({
            "Abstract": "",
            "RelatedTopics": [],
            "Results": [
                {"Text": "TypeScript Official Site", "FirstURL": "https://www.typescriptlang.org"},
                {"Text": "TypeScript Handbook", "FirstURL": "https://www.typescriptlang.org/docs"}
            ]
        }),
    )
    .await;

    let result = gateway_for(&server)
        .call(TOOL_NAME, Some(&args(json!({"query": "TypeScript", "limit": 3}))))
        .await
        .unwrap();

    assert_eq!(
        result,
        SearchResult::success(
            "TypeScript",
            vec![
                SearchResultItem {
                    title: "TypeScript Official Site".to_string(),
                    url: "https://www.typescriptlang.org".to_string(),
                    snippet: "TypeScript Official Site".to_string(),
                },
                SearchResultItem {
                    title: "TypeScript Handbook".to_string(),
                    url: "https://www.typescriptlang.org/docs".to_string(),
                    snippet: "TypeScript Handbook".to_string(),
                },
            ]
        )
    );
}

#[tokio::test]
async fn test_empty_answer_returns_placeholder() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        "xyzzy",
        json!({"Abstract": "", "RelatedTopics": [], "Results": []}),
    )
    .await;

    let result = gateway_for(&server)
        .call(TOOL_NAME, Some(&args(json!({"query": "xyzzy"}))))
        .await
        .unwrap();

    assert_eq!(result.error(), None);
    assert_eq!(result.results(), [SearchResultItem::no_results()]);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["count"], 1);
}

#[tokio::test]
async fn test_abstract_then_topics_with_truncated_titles() {
    let server = MockServer::start().await;
    let long_text = format!("{} - trailing description", "A".repeat(100));
    mount_body(
        &server,
        "artificial intelligence",
        json!({
            "Abstract": "Artificial intelligence is intelligence demonstrated by machines.",
            "Heading": "Artificial intelligence",
            "AbstractURL": "https://en.wikipedia.org/wiki/Artificial_intelligence",
            "RelatedTopics": [
                {
                    "Text": "Machine learning - Study of algorithms that improve through experience",
                    "FirstURL": "https://duckduckgo.com/Machine_learning"
                },
                {"Name": "See also", "Topics": [{"Text": "Ignored", "FirstURL": "https://x"}]},
                {"Text": long_text, "FirstURL": "https://duckduckgo.com/Long"}
            ]
        }),
    )
    .await;

    let result = gateway_for(&server)
        .call(
            TOOL_NAME,
            Some(&args(json!({"query": "artificial intelligence", "limit": 5}))),
        )
        .await
        .unwrap();

    let items = result.results();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Artificial intelligence");
    assert_eq!(
        items[0].url,
        "https://en.wikipedia.org/wiki/Artificial_intelligence"
    );
    assert_eq!(items[1].title, "Machine learning");
    assert_eq!(
        items[1].snippet,
        "Machine learning - Study of algorithms that improve through experience"
    );
    assert_eq!(items[2].title, "A".repeat(80));
    assert_eq!(items[2].snippet, long_text);
}

#[tokio::test]
async fn test_result_count_never_exceeds_limit_plus_abstract() {
    let server = MockServer::start().await;
    let topics: Vec<Value> = (0..15)
        .map(|i| json!({"Text": format!("Topic {i} - text"), "FirstURL": format!("https://t/{i}")}))
        .collect();
    let results: Vec<Value> = (0..15)
        .map(|i| json!({"Text": format!("Result {i}"), "FirstURL": format!("https://r/{i}")}))
        .collect();
    mount_body(
        &server,
        "many",
        json!({
            "Abstract": "Summary",
            "Heading": "Many",
            "RelatedTopics": topics,
            "Results": results
        }),
    )
    .await;

    let gateway = gateway_for(&server);
    for limit in 1..=12 {
        let result = gateway
            .call(TOOL_NAME, Some(&args(json!({"query": "many", "limit": limit}))))
            .await
            .unwrap();
        let effective = limit.min(10) as usize;
        let len = result.results().len();
        assert!(len <= effective + 1, "limit {limit} gave {len} results");
        assert!(len >= 1);
    }
}

#[tokio::test]
async fn test_repeated_search_renders_identical_text() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        "rust",
        json!({
            "Abstract": "Rust is a programming language.",
            "Heading": "Rust",
            "AbstractURL": "https://www.rust-lang.org",
            "RelatedTopics": [{"Text": "Cargo - Rust package manager", "FirstURL": "https://doc.rust-lang.org/cargo"}]
        }),
    )
    .await;

    let gateway = gateway_for(&server);
    let arguments = args(json!({"query": "rust", "limit": 4}));
    let first = gateway.call_tool(TOOL_NAME, Some(&arguments)).await.unwrap();
    let second = gateway.call_tool(TOOL_NAME, Some(&arguments)).await.unwrap();

    let text = |result: &rmcp::model::CallToolResult| {
        result.content[0]
            .as_text()
            .expect("expected a text block")
            .text
            .clone()
    };
    assert_eq!(text(&first), text(&second));
}

#[tokio::test]
async fn test_http_error_is_tool_output_not_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = gateway_for(&server)
        .call_tool(TOOL_NAME, Some(&args(json!({"query": "rust"}))))
        .await
        .unwrap();

    let text = &outcome.content[0].as_text().expect("expected a text block").text;
    let value: Value = serde_json::from_str(text).unwrap();
    assert_eq!(
        value,
        json!({"query": "rust", "error": "HTTP 500: Internal Server Error", "results": []})
    );
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);

    let err = gateway
        .call("fetch_page", Some(&args(json!({"query": "rust"}))))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::UnknownTool(_)));

    let err = gateway
        .call(TOOL_NAME, Some(&args(json!({"query": ""}))))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidQuery));
}

#[test]
fn test_unreachable_endpoint_reports_error_result() {
    let config = SearchConfig {
        endpoint: "http://127.0.0.1:9/".to_string(),
        timeout_secs: Some(5),
        ..Default::default()
    };
    let provider = DuckDuckGoProvider::from_config(&config).unwrap();
    let gateway = ToolGateway::new(Arc::new(provider));

    let arguments = args(json!({"query": "offline"}));
    let result = tokio_test::block_on(gateway.call(TOOL_NAME, Some(&arguments))).unwrap();

    assert_eq!(result.query(), "offline");
    assert!(result.error().is_some());
    assert!(result.results().is_empty());
}

#[tokio::test]
async fn test_string_limits_are_read_as_numbers() {
    let server = MockServer::start().await;
    let topics: Vec<Value> = (0..6)
        .map(|i| json!({"Text": format!("Topic {i} - text"), "FirstURL": format!("https://t/{i}")}))
        .collect();
    mount_body(
        &server,
        "loose",
        json!({"Abstract": "Summary", "Heading": "Loose", "RelatedTopics": topics}),
    )
    .await;

    let gateway = gateway_for(&server);
    let count = |result: SearchResult| result.results().len();

    let numeric = gateway
        .call(TOOL_NAME, Some(&args(json!({"query": "loose", "limit": "3"}))))
        .await
        .unwrap();
    assert_eq!(count(numeric), 3);

    // Only the ungated abstract survives a non-numeric limit
    let garbage = gateway
        .call(TOOL_NAME, Some(&args(json!({"query": "loose", "limit": "abc"}))))
        .await
        .unwrap();
    assert_eq!(garbage.results().len(), 1);
    assert_eq!(garbage.results()[0].title, "Loose");
}
