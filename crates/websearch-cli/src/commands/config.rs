//! `config`: print the effective configuration

use anyhow::{Context, Result};
use websearch_config::WebSearchConfig;

/// Print `config` as TOML
pub fn execute(config: &WebSearchConfig) -> Result<()> {
    let toml = config
        .to_toml()
        .context("Failed to serialize configuration")?;
    print!("{}", toml);
    Ok(())
}
