use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "websearch-mcp")]
#[command(about = "MCP server exposing a DuckDuckGo instant-answer search tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (default: <config dir>/websearch-mcp/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,

    /// Run one search and print the JSON result
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (default 5, max 10)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Run the built-in scenario queries against the live endpoint
    Selftest,

    /// Show the effective configuration as TOML
    Config,
}
