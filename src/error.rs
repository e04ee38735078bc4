//! Structured errors with a programmatic code, message, and contextual data.
//!
//! [`Error`] gives every failure a stable string code that callers can match
//! on, a human-readable message intended for clients, an optional HTTP status
//! for API handlers, a key-value data payload, and an optional underlying
//! source error kept for debugging. It serializes to JSON for transport;
//! the source is never serialized.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A structured error with a unique code, message, additional data, and an
/// optional underlying error.
#[derive(Debug, Serialize)]
pub struct Error {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    message: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
    #[serde(skip)]
    source: Option<BoxedSource>,
}

impl Error {
    /// Creates an error with the given code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status_code: None,
            message: message.into(),
            data: Map::new(),
            source: None,
        }
    }

    /// Creates an error with a code and HTTP status code only.
    #[must_use]
    pub fn api(code: impl Into<String>, status_code: u16) -> Self {
        Self::new(code, "").with_status(status_code)
    }

    /// Sets the HTTP status code (builder pattern).
    #[must_use]
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Adds a contextual key-value entry (builder pattern).
    #[must_use]
    pub fn with_data_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Attaches the error that triggered this one (builder pattern).
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the HTTP status code, if one was set.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the contextual data map.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Serializes the error to JSON bytes. Useful for HTTP responses.
    #[must_use]
    pub fn to_json_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Predefined `INTERNAL_SERVER_ERROR` (HTTP 500).
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::api("INTERNAL_SERVER_ERROR", 500)
    }

    /// Predefined `BAD_REQUEST` (HTTP 400).
    #[must_use]
    pub fn bad_request() -> Self {
        Self::api("BAD_REQUEST", 400)
    }

    /// Predefined `UNAUTHORIZED` (HTTP 401).
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::api("UNAUTHORIZED", 401)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "code: {}, message: {}, underlying error: {}",
                self.code, self.message, source
            ),
            None => write!(f, "code: {}, message: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn std::error::Error + 'static))
    }
}
