// File: crates/guesslab-client/src/error.rs
// Summary: Failures at the network boundary, the only fallible layer.

use thiserror::Error;

/// Message shown when the server rejects a request without saying why.
pub const FALLBACK_MESSAGE: &str = "Request failed";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// Text for the status area.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http(e) if e.is_timeout() => "The server took too long to respond.".to_string(),
            ClientError::Http(_) => "Could not reach the server.".to_string(),
            ClientError::Decode(_) => FALLBACK_MESSAGE.to_string(),
            ClientError::Config(e) => e.to_string(),
        }
    }
}
