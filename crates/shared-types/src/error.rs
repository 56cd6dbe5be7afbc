use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of errors reported by the employee API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    InternalError,
    Unavailable,
}

impl AppErrorKind {
    /// Classify a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            429 => AppErrorKind::RateLimited,
            502..=504 => AppErrorKind::Unavailable,
            400..=499 => AppErrorKind::BadRequest,
            _ => AppErrorKind::InternalError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
            AppErrorKind::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Structured error decoded from an API error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub status: u16,
    /// Diagnostic text from the response body; may be empty.
    pub message: String,
}

/// Shapes the backend uses for error bodies: `{"error": ".."}` or `{"message": ".."}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl AppError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::from_status(status),
            status,
            message: message.into(),
        }
    }

    /// Build an error from a non-success status and its response body.
    ///
    /// JSON bodies contribute their `error` or `message` field; any other
    /// body is used as trimmed plain text.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::new(status, Self::extract_message(body))
    }

    /// Pull the human-readable part out of an error response body.
    pub fn extract_message(body: &str) -> String {
        let trimmed = body.trim();
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
            if let Some(msg) = parsed.error.or(parsed.message) {
                return msg.trim().to_string();
            }
        }
        // A JSON value without a usable field carries nothing to show.
        if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
            return String::new();
        }
        trimmed.to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.status, self.message)
    }
}

impl std::error::Error for AppError {}
