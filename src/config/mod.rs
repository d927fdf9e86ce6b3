mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Environment variables consulted for the upstream credential, in
/// precedence order. The first non-empty value wins.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => contents,
        // The file is optional; the credential never lives in it.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Resolves the upstream API key from the process environment.
pub fn resolve_api_key() -> Option<String> {
    resolve_api_key_with(|name| env::var(name).ok())
}

/// Credential resolution over an arbitrary lookup, so precedence is
/// testable without mutating the process environment.
pub fn resolve_api_key_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}
