//! websearch-mcp command-line interface
//!
//! Argument parsing, logging setup, and the subcommands behind the
//! `websearch-mcp` binary.

pub mod cli;
pub mod commands;
pub mod logging;
