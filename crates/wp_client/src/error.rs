use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid backend url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {path} timed out")]
    Timeout { path: String },
    #[error("GET {path} failed with status {status}")]
    Status { path: String, status: u16 },
    #[error("unexpected payload from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub(crate) fn from_reqwest(path: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            UpstreamError::Timeout {
                path: path.to_string(),
            }
        } else {
            UpstreamError::Request {
                path: path.to_string(),
                source,
            }
        }
    }
}
