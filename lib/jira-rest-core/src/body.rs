//! Body serialization utilities.

use bytes::Bytes;

use crate::{Error, Result};

/// Media types the client sends and recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
        }
    }

    /// Returns `true` if a `Content-Type` header value denotes JSON.
    ///
    /// Accepts parameters (`; charset=UTF-8`) and structured suffixes
    /// such as `application/problem+json`.
    #[must_use]
    pub fn is_json(header_value: &str) -> bool {
        let essence = header_value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        essence == "application/json" || essence.ends_with("+json")
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use jira_rest_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Group { name: String }
///
/// let group = Group { name: "jira-users".to_string() };
/// let bytes = to_json(&group).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"jira-users"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize a response body as JSON with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failure reports the exact field that did
/// not match (e.g. `values[3].id`). An empty body is read as JSON `null`,
/// which lets `()` and `Option<T>` accept bodiless responses.
///
/// # Errors
///
/// Returns [`Error::Decode`] carrying `status` if deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(status: u16, bytes: &[u8]) -> Result<T> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::decode(status, e.path().to_string(), e.inner().to_string()))?;
    deserializer
        .end()
        .map_err(|e| Error::decode(status, "", e.to_string()))?;
    Ok(value)
}
