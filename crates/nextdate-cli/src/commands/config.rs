//! Configuration commands.

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Renders the effective configuration as TOML.
pub fn dump(config: &ClientConfig) -> ClientResult<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(format!(
        "# config.toml ({})\n{}",
        ClientConfig::default_path().display(),
        toml_str
    ))
}

/// Renders the configuration file path.
pub fn path() -> String {
    format!("config: {}", ClientConfig::default_path().display())
}
