//! OMDb (Open Movie Database) metadata source.
//!
//! Implements [`MovieSource`] by querying the single OMDb endpoint with
//! different query parameters:
//!
//! - `t=` strict title lookup,
//! - `s=` broad search (filtered to `type=movie`),
//! - `i=` lookup by IMDb identifier.
//!
//! Features:
//! - Configurable per-request timeout (30 seconds by default).
//! - Automatic retry on HTTP 429 with `Retry-After` header support, capped at
//!   [`MAX_RETRY_WAIT_SECS`] per attempt.
//! - API-level misses are decoded into [`ApiResponse::Missing`] regardless of
//!   the HTTP status, since OMDb reports them as JSON bodies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::OmdbConfig;
use crate::error::{Error, Result};
use crate::metadata::provider::{ApiResponse, MovieDetail, MovieSource, SearchPage};

/// Longest wait honoured from a `Retry-After` header.
pub const MAX_RETRY_WAIT_SECS: u64 = 30;

/// Seconds to wait before retrying a 429. Defaults to 1 when the header is
/// absent or not a number of seconds.
fn retry_wait(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(1)
        .min(MAX_RETRY_WAIT_SECS)
}

/// OMDb metadata source.
///
/// # Examples
///
/// ```no_run
/// use cinematch::config::OmdbConfig;
/// use cinematch::metadata::providers::OmdbProvider;
///
/// let mut config = OmdbConfig::default();
/// config.api_key = Some("your-api-key".into());
/// let provider = OmdbProvider::new(&config);
/// ```
pub struct OmdbProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
}

impl OmdbProvider {
    /// Create a new OMDb source from configuration.
    ///
    /// A missing API key is allowed here; [`MovieSource::is_available`]
    /// reports it and the resolver refuses to run.
    pub fn new(config: &OmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key().map(str::to_string),
            max_retries: config.max_retries,
        }
    }

    /// Build the request URL. The API key goes first; `params` are
    /// percent-encoded by [`Url::parse_with_params`].
    fn url(&self, params: &[(&str, &str)]) -> Result<Url> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let all = std::iter::once(("apikey", key)).chain(params.iter().copied());
        Url::parse_with_params(&self.base_url, all)
            .map_err(|e| Error::transport(format!("Invalid OMDb URL {}", self.base_url), e))
    }

    /// Execute a GET request with 429-retry logic and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<ApiResponse<T>> {
        let url = self.url(params)?;
        debug!(params = ?params, "OMDb request");

        let mut retries = 0u32;
        loop {
            let resp = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| Error::transport("OMDb request failed", e))?;

            let status = resp.status();
            if status == StatusCode::TOO_MANY_REQUESTS && retries < self.max_retries {
                retries += 1;
                let wait = retry_wait(resp.headers());
                warn!(
                    retry = retries,
                    wait_secs = wait,
                    "OMDb returned 429, backing off"
                );
                tokio::time::sleep(Duration::from_secs(wait)).await;
                continue;
            }

            let body = resp
                .bytes()
                .await
                .map_err(|e| Error::transport("Failed to read OMDb response", e))?;

            return serde_json::from_slice(&body).map_err(|e| {
                Error::transport(format!("Failed to parse OMDb response (HTTP {status})"), e)
            });
        }
    }
}

#[async_trait]
impl MovieSource for OmdbProvider {
    fn name(&self) -> &'static str {
        "omdb"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn lookup_title(
        &self,
        title: &str,
        year: Option<&str>,
        language: &str,
    ) -> Result<ApiResponse<MovieDetail>> {
        let mut params = vec![("t", title)];
        if let Some(y) = year {
            params.push(("y", y));
        }
        params.push(("language", language));
        self.get(&params).await
    }

    async fn search(&self, title: &str, year: Option<&str>) -> Result<ApiResponse<SearchPage>> {
        let mut params = vec![("s", title)];
        if let Some(y) = year {
            params.push(("y", y));
        }
        params.push(("type", "movie"));
        self.get(&params).await
    }

    async fn lookup_id(&self, imdb_id: &str, language: &str) -> Result<ApiResponse<MovieDetail>> {
        self.get(&[("i", imdb_id), ("language", language)]).await
    }
}
