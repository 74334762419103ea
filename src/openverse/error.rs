//! Error types for the Openverse API client.

use thiserror::Error;

/// Errors that can occur when talking to the Openverse API.
#[derive(Debug, Error)]
pub enum OpenverseError {
    /// The API answered with a non-success status.
    #[error("API request failed: {}", status_line(*status, reason))]
    Request { status: u16, reason: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to parse API response: {0}")]
    Parse(String),

    /// Network-level failure (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot carry the request path.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl OpenverseError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// `404 Not Found`, or just `599` when the status has no reason phrase.
fn status_line(status: u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}
