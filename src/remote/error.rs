//! Error types for calls to the ritual API.
//!
//! Failures split into two kinds: the request never got an answer
//! (transport, timeout) or the remote side answered and declined
//! (non-2xx status). Both normalise to `ConfirmationOutcome::Rejected`
//! at the confirm boundary; the kind survives only in the reason text.

use thiserror::Error;

use crate::optimistic::ConfirmationOutcome;

/// Errors that can occur when talking to the ritual API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Failed to reach the remote side
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request to '{endpoint}' timed out after {duration}s")]
    Timeout { endpoint: String, duration: u64 },

    /// Remote side responded with a non-success status
    #[error("Request to '{endpoint}' rejected: {status} - {body}")]
    Rejection {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Endpoint URL could not be built from the base URL
    #[error("Invalid URL for '{endpoint}': {message}")]
    InvalidUrl { endpoint: String, message: String },

    /// Response body was not the expected JSON
    #[error("Invalid response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },
}

impl RemoteError {
    /// The remote side could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RemoteError::Build(_) | RemoteError::Transport { .. } | RemoteError::Timeout { .. }
        )
    }

    /// The remote side answered but declined.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RemoteError::Rejection { .. })
    }

    /// Text shown to the user when a confirmation fails.
    ///
    /// Rejections surface the response body; everything else its description.
    pub fn reason(&self) -> String {
        match self {
            RemoteError::Rejection { status, body, .. } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.to_string()
                }
            }
            other => other.to_string(),
        }
    }

    /// Short machine-readable kind for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            RemoteError::Build(_) => "build_error",
            RemoteError::Transport { .. } => "transport_failure",
            RemoteError::Timeout { .. } => "timeout",
            RemoteError::Rejection { .. } => "remote_rejection",
            RemoteError::InvalidUrl { .. } => "invalid_url",
            RemoteError::Decode { .. } => "decode_error",
        }
    }
}

impl From<Result<(), RemoteError>> for ConfirmationOutcome {
    fn from(result: Result<(), RemoteError>) -> Self {
        match result {
            Ok(()) => ConfirmationOutcome::Accepted,
            Err(err) => {
                tracing::debug!(error_type = err.error_type(), error = %err, "Confirmation failed");
                ConfirmationOutcome::Rejected(err.reason())
            }
        }
    }
}
