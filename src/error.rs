use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors produced while relaying a preview request
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-2xx status from upstream
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// The outbound call did not finish within the configured timeout
    #[error("Upstream timed out: {0}")]
    UpstreamTimeout(String),

    /// Upstream answered, but the body did not match the expected shape
    #[error("Upstream response could not be parsed: {0}")]
    UpstreamParse(String),

    /// Reserved for inbound request validation
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound client or listener setup failed
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Status code surfaced to the caller for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UpstreamFetch(_) | Error::UpstreamParse(_) => StatusCode::BAD_GATEWAY,
            Error::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Error::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Http(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let target = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown url>".to_string());
        if e.is_timeout() {
            Error::UpstreamTimeout(target)
        } else {
            Error::UpstreamFetch(format!("{}: {}", target, e))
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::UpstreamParse(e.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            ::log::warn!("Request failed with {}: {}", status, self);
        } else {
            ::log::debug!("Request rejected with {}: {}", status, self);
        }

        // Only the reason phrase leaves the process.
        let body = status.canonical_reason().unwrap_or("Error");
        (status, body).into_response()
    }
}
