//! Error type shared by every upstream call

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error ({status}) for {url}")]
    Remote { status: u16, url: String },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Failed to decode {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Upstream is offline or unreachable")]
    Offline,

    #[error("Request timed out")]
    Timeout,
}

impl IntegrationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, IntegrationError::NotFound { .. })
    }

    pub(crate) fn decode(url: &str, message: impl Into<String>) -> Self {
        IntegrationError::Decode {
            url: url.to_string(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for IntegrationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            IntegrationError::Timeout
        } else if err.is_connect() {
            IntegrationError::Offline
        } else {
            IntegrationError::Network(err.to_string())
        }
    }
}
