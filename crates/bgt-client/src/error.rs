//! Error types for the bgt-client library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, API, hypermedia, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for bgt-client operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx API responses, with the Mason error body when available.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Hypermedia errors (missing relation, unusable control).
    #[error("hypermedia error: {0}")]
    Hypermedia(#[from] HypermediaError),

    /// Input validation errors (invalid API URL, bad row reference).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// The message a notification area should show for this error.
    ///
    /// For API errors carrying a Mason `@message`, this is exactly that
    /// message; everything else falls back to the full display form.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error (including body decode failures).
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-2xx response from the API.
///
/// Carries the HTTP status plus whatever could be recovered from the Mason
/// `@error` body. A malformed or missing error body degrades to a
/// status-only error rather than failing a second time.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The `@error.@message` title, when the body parsed.
    pub message: Option<String>,
    /// The `@error.@messages` details, when present.
    pub details: Vec<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>, details: Vec<String>) -> Self {
        Self {
            status,
            message,
            details,
        }
    }

    /// The message to surface to the user.
    pub fn user_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("HTTP {}", self.status),
        }
    }

    /// Check if this is a not-found response.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this is a conflict response (e.g. duplicate player name).
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

/// Hypermedia-level errors: the representation arrived, but does not offer
/// what the caller needs.
#[derive(Debug, Error)]
pub enum HypermediaError {
    /// The representation does not carry the requested control.
    #[error("representation has no '{relation}' control")]
    MissingControl { relation: String },

    /// The control declares a method the caller cannot use here.
    #[error("control declares method '{method}', expected {expected}")]
    UnexpectedMethod { method: String, expected: String },

    /// The control's method string is not a valid HTTP method.
    #[error("control declares unusable method '{method}'")]
    UnusableMethod { method: String },

    /// The control carries no input schema, but one is needed to build a form.
    #[error("control has no schema to build a form from")]
    MissingSchema,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A control href that cannot be resolved against the base URL.
    #[error("invalid href '{value}': {reason}")]
    Href { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_with_message() {
        let err = ApiError::new(404, Some("Player not found".to_string()), vec![]);
        assert_eq!(err.to_string(), "HTTP 404: Player not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn user_message_prefers_mason_message() {
        let err = Error::Api(ApiError::new(
            404,
            Some("Player not found".to_string()),
            vec!["no such row".to_string()],
        ));
        assert_eq!(err.user_message(), "Player not found");
    }

    #[test]
    fn user_message_falls_back_to_status() {
        let err = Error::Api(ApiError::new(503, None, vec![]));
        assert_eq!(err.user_message(), "HTTP 503");
    }

    #[test]
    fn missing_control_display_names_relation() {
        let err = Error::Hypermedia(HypermediaError::MissingControl {
            relation: "edit".to_string(),
        });
        assert!(err.to_string().contains("'edit'"));
    }
}
