use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use shared::domain::{Category, Post};
use tracing::debug;
use url::Url;

mod error;
mod query;

pub use error::UpstreamError;
pub use query::{CategoryQuery, PostQuery, QueryParams};

pub const API_PREFIX: &str = "wp-json/wp/v2";
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";
pub const TOTAL_ITEMS_HEADER: &str = "x-wp-total";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether upstream calls carry a bearer credential. Chosen once at startup.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    Public,
    Authenticated { token: String },
}

impl AuthMode {
    pub fn from_token(token: Option<String>) -> Self {
        match token.map(|t| t.trim().to_string()) {
            Some(token) if !token.is_empty() => AuthMode::Authenticated { token },
            _ => AuthMode::Public,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Public => "public",
            AuthMode::Authenticated { .. } => "authenticated",
        }
    }
}

impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Public => f.write_str("Public"),
            AuthMode::Authenticated { .. } => f.write_str("Authenticated { token: <redacted> }"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_root: String,
    pub auth: AuthMode,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(backend_url: &str, auth: AuthMode, timeout: Duration) -> Result<Self, UpstreamError> {
        let trimmed = backend_url.trim().trim_end_matches('/');
        let base = Url::parse(trimmed).map_err(|source| UpstreamError::InvalidBaseUrl {
            url: backend_url.to_string(),
            source,
        })?;
        let api_root = format!("{}/{API_PREFIX}", base.as_str().trim_end_matches('/'));
        Ok(Self {
            api_root,
            auth,
            timeout,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

/// Body and headers of a successful upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, UpstreamError> {
        serde_json::from_slice(&self.body).map_err(|source| UpstreamError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Falls back to a single page when the header is absent, non-numeric or zero.
    pub fn total_pages(&self) -> u32 {
        header_number(&self.headers, TOTAL_PAGES_HEADER)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(1)
    }

    pub fn total_items(&self) -> Option<u64> {
        header_number(&self.headers, TOTAL_ITEMS_HEADER)
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// One page of a collection plus the pagination totals reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_items: Option<u64>,
}

/// The content operations the site needs from the backend.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, UpstreamError>;
    async fn posts(&self, query: &PostQuery) -> Result<Paged<Post>, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct WpClient {
    http: Client,
    config: ClientConfig,
}

impl WpClient {
    pub fn new(config: ClientConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| UpstreamError::Request {
                path: config.api_root.clone(),
                source,
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<UpstreamResponse, UpstreamError> {
        let url = format!("{}/{}", self.config.api_root, path.trim_start_matches('/'));
        let mut request = self.http.get(&url).query(query);
        if let AuthMode::Authenticated { token } = &self.config.auth {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(path, e))?;
        let status = response.status();
        debug!(path, %status, "upstream response");
        if !status.is_success() {
            return Err(UpstreamError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(path, e))?
            .to_vec();
        Ok(UpstreamResponse {
            path: path.to_string(),
            headers,
            body,
        })
    }
}

#[async_trait]
impl ContentSource for WpClient {
    async fn categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, UpstreamError> {
        self.get("categories", &query.to_params()).await?.decode()
    }

    async fn posts(&self, query: &PostQuery) -> Result<Paged<Post>, UpstreamError> {
        let response = self.get("posts", &query.to_params()).await?;
        let items: Vec<Post> = response.decode()?;
        Ok(Paged {
            total_pages: response.total_pages(),
            total_items: response.total_items(),
            items,
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
