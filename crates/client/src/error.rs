//! Failure taxonomy for fetching the employee profile.

use shared_types::AppError;
use thiserror::Error;

/// Shown when a failure carries no usable text of its own.
pub const GENERIC_FAILURE: &str = "Failed to fetch employee data";

/// Why a profile fetch failed. Every variant is terminal for the activation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// No response reached the caller.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("HTTP error: {0}")]
    Http(AppError),

    /// The body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Parse(String),

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ProfileError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ProfileError::Transport(err.to_string())
    }

    pub fn http(status: u16, body: &str) -> Self {
        ProfileError::Http(AppError::from_response(status, body))
    }

    /// Message for the page's alert region.
    pub fn user_message(&self) -> String {
        match self {
            ProfileError::Transport(msg) | ProfileError::Config(msg) => {
                if msg.trim().is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    msg.clone()
                }
            }
            ProfileError::Http(err) if err.message.is_empty() => {
                format!("{GENERIC_FAILURE} (HTTP {})", err.status)
            }
            ProfileError::Http(err) => {
                format!("{GENERIC_FAILURE} (HTTP {}): {}", err.status, err.message)
            }
            // Parse detail is logged, not shown.
            ProfileError::Parse(_) => GENERIC_FAILURE.to_string(),
        }
    }
}
