use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,

    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbConfig {
    /// OMDb API key (overridden by the `OMDB_API_KEY` environment variable)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint all requests are sent to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language used when a query does not name one
    /// (overridden by the `DEFAULT_LANGUAGE` environment variable)
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Retries on HTTP 429 before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_retries() -> u32 {
    3
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_language: default_language(),
            max_retries: default_max_retries(),
        }
    }
}

impl OmdbConfig {
    /// The configured API key, treating a blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// Extra title translations, keyed by the original title
    /// (matched case-insensitively)
    #[serde(default)]
    pub titles: BTreeMap<String, String>,
}
