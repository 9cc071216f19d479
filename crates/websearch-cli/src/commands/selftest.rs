//! `selftest`: smoke-test the live endpoint
//!
//! Runs a fixed set of queries (English, Chinese, and a technical one)
//! through the same gateway the MCP server uses.

use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;
use tracing::debug;
use websearch_config::WebSearchConfig;
use websearch_tools::{DuckDuckGoProvider, SearchResult, ToolGateway, TOOL_NAME};

use super::search::arguments;

/// Queries exercised by the self test, all with this limit
pub const SCENARIOS: &[&str] = &["TypeScript", "人工智能", "Node.js fs module"];

/// Limit used for every scenario
pub const SCENARIO_LIMIT: i64 = 3;

/// Why a scenario did not pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioFailure {
    /// The search came back as an error result
    Error(String),
    /// The search succeeded with no items
    Empty,
}

/// A scenario passes when the result has no error and at least one item
pub fn evaluate(result: &SearchResult) -> Result<usize, ScenarioFailure> {
    if let Some(error) = result.error() {
        return Err(ScenarioFailure::Error(error.to_string()));
    }
    match result.results().len() {
        0 => Err(ScenarioFailure::Empty),
        n => Ok(n),
    }
}

/// Run every scenario; returns `true` when all passed
pub async fn execute(config: WebSearchConfig) -> Result<bool> {
    let provider = DuckDuckGoProvider::from_config(&config.search)
        .context("Failed to create search provider")?;
    let gateway = ToolGateway::new(Arc::new(provider));

    println!(
        "{} {}",
        "Testing web search against".cyan().bold(),
        config.search.endpoint
    );

    let mut passed = 0;
    for query in SCENARIOS {
        let result = gateway
            .call(TOOL_NAME, Some(&arguments(query, Some(SCENARIO_LIMIT))))
            .await?;
        debug!("Scenario '{}': {:?}", query, result);

        match evaluate(&result) {
            Ok(count) => {
                passed += 1;
                println!("  {} {} ({} results)", "✓".green(), query, count);
                if let Some(first) = result.results().first() {
                    println!("      {}", first.title.dimmed());
                }
            }
            Err(ScenarioFailure::Error(error)) => {
                println!("  {} {}: {}", "✗".red(), query, error);
            }
            Err(ScenarioFailure::Empty) => {
                println!("  {} {}: no results", "✗".red(), query);
            }
        }
    }

    let all_passed = passed == SCENARIOS.len();
    let summary = format!("{}/{} scenarios passed", passed, SCENARIOS.len());
    if all_passed {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
    Ok(all_passed)
}
