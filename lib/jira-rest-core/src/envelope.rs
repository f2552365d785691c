//! Result envelopes: the uniform outcome of one API call.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

use crate::request::find_header;
use crate::{Error, Result};

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    /// JSON body decoded into the caller's type.
    Json(T),
    /// Text body.
    Text(String),
    /// No body was expected.
    Empty,
}

impl<T> Payload<T> {
    /// The JSON value, if this is a JSON payload.
    #[must_use]
    pub fn into_json(self) -> Option<T> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The text, if this is a text payload.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for [`Payload::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Transform the JSON value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Payload<U> {
        match self {
            Self::Json(value) => Payload::Json(f(value)),
            Self::Text(text) => Payload::Text(text),
            Self::Empty => Payload::Empty,
        }
    }
}

/// Outcome of an API call that produced a response.
///
/// Exactly one of the success payload or the error is present. Transport
/// failures, decode failures and malformed requests never reach an
/// envelope; they are returned as [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    /// The status was declared by the endpoint's expectation table.
    Success {
        /// HTTP status code.
        status: u16,
        /// Response headers.
        headers: HashMap<String, String>,
        /// Decoded body.
        payload: Payload<T>,
    },
    /// The status was not declared: Jira rejected the request.
    Failure(ApiError),
}

impl<T> Envelope<T> {
    /// Returns `true` for [`Envelope::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } => *status,
            Self::Failure(err) => err.status,
        }
    }

    /// Single response header, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            Self::Success { headers, .. } => find_header(headers, name),
            Self::Failure(err) => err.header(name),
        }
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Payload<T>> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// The application error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Convert into a plain result, turning a failure into [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for [`Envelope::Failure`].
    pub fn into_result(self) -> Result<Payload<T>> {
        match self {
            Self::Success { payload, .. } => Ok(payload),
            Self::Failure(err) => Err(Error::Api(err)),
        }
    }

    /// Convert into the decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a failure, or [`Error::Decode`] if the
    /// success carried no JSON payload.
    pub fn into_json(self) -> Result<T> {
        let status = self.status();
        match self.into_result()? {
            Payload::Json(value) => Ok(value),
            Payload::Text(_) => Err(Error::decode(status, "", "expected a JSON payload, got text")),
            Payload::Empty => Err(Error::decode(status, "", "expected a JSON payload, got none")),
        }
    }

    /// Transform the JSON value of a success.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Self::Success {
                status,
                headers,
                payload,
            } => Envelope::Success {
                status,
                headers,
                payload: payload.map(f),
            },
            Self::Failure(err) => Envelope::Failure(err),
        }
    }
}

/// Best-effort decoded body of an error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// The body was valid JSON with a JSON content type.
    Json(serde_json::Value),
    /// Any other non-empty body, decoded lossily as UTF-8.
    Text(String),
    /// No body.
    Empty,
}

/// Jira's standard error payload.
///
/// ```json
/// {"errorMessages": ["Group does not exist."], "errors": {"name": "required"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCollection {
    /// General error messages.
    #[serde(default)]
    pub error_messages: Vec<String>,
    /// Field-specific errors, keyed by field name.
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
    /// HTTP status echoed by some endpoints.
    #[serde(default)]
    pub status: Option<u16>,
}

/// A response whose status the endpoint did not declare as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: u16,
    headers: HashMap<String, String>,
    body: ErrorBody,
}

impl ApiError {
    /// Create an application error.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: ErrorBody) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single response header, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Decoded error body.
    #[must_use]
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }

    /// The body as Jira's standard error collection, if it has that shape.
    #[must_use]
    pub fn collection(&self) -> Option<ErrorCollection> {
        match &self.body {
            ErrorBody::Json(value) if value.is_object() => {
                ErrorCollection::deserialize(value).ok()
            }
            _ => None,
        }
    }

    /// Human-readable messages: general messages first, then `field: message`.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        if let Some(collection) = self.collection() {
            let mut messages = collection.error_messages;
            messages.extend(
                collection
                    .errors
                    .into_iter()
                    .map(|(field, message)| format!("{field}: {message}")),
            );
            if !messages.is_empty() {
                return messages;
            }
        }
        match &self.body {
            ErrorBody::Text(text) if !text.trim().is_empty() => vec![text.trim().to_string()],
            _ => Vec::new(),
        }
    }

    /// Decode the JSON body into a caller-provided error type.
    #[must_use]
    pub fn decode_body<E: serde::de::DeserializeOwned>(&self) -> Option<E> {
        match &self.body {
            ErrorBody::Json(value) => E::deserialize(value).ok(),
            _ => None,
        }
    }

    /// Returns `true` for 400.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    /// Returns `true` for 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns `true` for 403.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Returns `true` for 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns `true` for 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jira returned {}", self.status)?;
        let messages = self.messages();
        if !messages.is_empty() {
            write!(f, ": {}", messages.join("; "))?;
        }
        Ok(())
    }
}
