//! reqwest-backed transport.
//!
//! Holds a single `reqwest::Client` for its lifetime so connections are
//! pooled across requests.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::Transport;
use super::error::TransportError;

/// Default base URL for the police open data API.
const DEFAULT_BASE_URL: &str = "https://data.police.uk/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest body excerpt kept in error values.
const BODY_PREVIEW_LEN: usize = 500;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for the API (defaults to data.police.uk)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
}

impl TransportConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("police-data/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP transport for the police API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "GET");

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%url, status = status.as_u16(), "request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Json {
            message: e.to_string(),
            body: Some(preview(&body)),
        })
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_LEN).collect()
}
