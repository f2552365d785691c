//! Error types for jira-rest.
//!
//! Application-level failures (a Jira status outside the declared success
//! set) are not errors here: they arrive as [`Envelope::Failure`]. This enum
//! covers everything that prevents an envelope from being produced.
//!
//! [`Envelope::Failure`]: crate::Envelope::Failure

use derive_more::{Display, Error, From};

use crate::ApiError;

/// Main error type for jira-rest operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Network/connection errors (DNS failure, connection refused, reset).
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// A `{placeholder}` in the path template has no path parameter.
    #[display("missing path parameter '{name}' for template '{template}'")]
    #[from(skip)]
    MissingPathParameter {
        /// Placeholder name.
        name: String,
        /// The unresolved template.
        template: &'static str,
    },

    /// A path parameter value would not stay a single path segment.
    #[display("path parameter '{name}' for template '{template}' cannot be {value:?}")]
    #[from(skip)]
    InvalidPathParameter {
        /// Placeholder name.
        name: String,
        /// The rejected value.
        value: String,
        /// The unresolved template.
        template: &'static str,
    },

    /// The path template itself is malformed.
    #[display("invalid path template '{template}': {reason}")]
    #[from(skip)]
    InvalidTemplate {
        /// The malformed template.
        template: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// A response with a declared status could not be decoded with the
    /// declared strategy.
    #[display("failed to decode {status} response at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// HTTP status code of the undecodable response.
        status: u16,
        /// JSON path to the error (e.g., `values[0].id`), empty for syntax errors.
        path: String,
        /// Error message.
        message: String,
    },

    /// Jira answered with a status outside the declared success set.
    ///
    /// Only produced by [`Envelope::into_result`](crate::Envelope::into_result).
    #[display("{_0}")]
    #[from(skip)]
    Api(#[error(not(source))] ApiError),

    /// Invalid or incomplete client configuration.
    #[display("configuration error: {_0}")]
    #[from(skip)]
    Config(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Query string serialization error.
    #[display("query serialization error: {_0}")]
    #[from]
    QuerySerialization(serde_html_form::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(status: u16, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            status,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if no response was obtained from the server.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns `true` if a declared response could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` if the request was rejected before reaching the transport
    /// because the caller built it incorrectly.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingPathParameter { .. }
                | Self::InvalidPathParameter { .. }
                | Self::InvalidTemplate { .. }
        )
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            Self::Api(err) => Some(err.status()),
            _ => None,
        }
    }

    /// Returns the application error, if this wraps one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}
