//! Paperless-ngx Client Library
//!
//! Typed HTTP client for the Paperless-ngx REST API.

mod client;

pub use client::Client;
pub use paperless_core::*;
pub use reqwest::Method;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid token: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Server returned {status} {status_text}")]
    Status { status: u16, status_text: String },
}

impl ClientError {
    /// HTTP status of a failed call, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
