mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable holding the OMDb API key
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Environment variable holding the default query language
pub const DEFAULT_LANGUAGE_ENV: &str = "DEFAULT_LANGUAGE";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./cinematch.toml",
        "~/.config/cinematch/config.toml",
        "/etc/cinematch/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

/// Overlay environment settings on top of file settings.
///
/// Blank values are ignored so an exported-but-empty variable does not wipe
/// out a key from the config file.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = non_blank(API_KEY_ENV) {
        config.omdb.api_key = Some(key);
    }
    if let Some(language) = non_blank(DEFAULT_LANGUAGE_ENV) {
        config.omdb.default_language = language;
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.omdb.timeout_secs == 0 {
        anyhow::bail!("OMDb timeout cannot be 0");
    }

    if config.omdb.default_language.trim().is_empty() {
        anyhow::bail!("Default language cannot be empty");
    }

    reqwest::Url::parse(&config.omdb.base_url)
        .with_context(|| format!("Invalid OMDb base URL: {}", config.omdb.base_url))?;

    if config.omdb.api_key().is_none() {
        tracing::warn!(
            "No OMDb API key configured; set {} or omdb.api_key",
            API_KEY_ENV
        );
    }

    for (original, english) in &config.translation.titles {
        if original.trim().is_empty() || english.trim().is_empty() {
            anyhow::bail!("Translation entries cannot be blank");
        }
    }

    Ok(())
}
