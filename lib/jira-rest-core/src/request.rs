//! Request descriptors and resolved requests.
//!
//! An endpoint function describes one call as a [`RequestDescriptor`]:
//! method, path template, path and query parameters, body, header
//! overrides and the [`Expectation`] table. [`RequestDescriptor::resolve`]
//! turns it into a transport-ready [`Request`] whose target is relative to
//! the configured Jira base URL.
//!
//! # Example
//!
//! ```
//! use jira_rest_core::{Expectation, Method, PathTemplate, RequestDescriptor};
//!
//! let request = RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/priority/{id}"))
//!     .path("id", "10001")
//!     .query("expand", "schemes")
//!     .expect(Expectation::json(200))
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(request.target(), "/rest/api/3/priority/10001?expand=schemes");
//! assert_eq!(request.header("accept"), Some("application/json"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use url::{Url, form_urlencoded};

use crate::{ContentType, Expectation, Method, PathParams, PathTemplate, QueryParams, QueryValue, Result};

/// Case-insensitive header lookup.
pub(crate) fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Request body, either structured or pre-serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Structured JSON value, serialized at resolution time.
    Json(serde_json::Value),
    /// Pre-serialized text, sent as-is.
    Text(String),
}

impl Body {
    /// Build a JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    fn to_bytes(&self) -> Result<Bytes> {
        match self {
            Self::Json(value) => crate::to_json(value),
            Self::Text(text) => Ok(Bytes::from(text.clone())),
        }
    }
}

/// Description of one API call before resolution.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    template: PathTemplate,
    path_params: PathParams,
    query: QueryParams,
    body: Option<Body>,
    headers: HashMap<String, String>,
    expectation: Expectation,
}

impl RequestDescriptor {
    /// Start a descriptor. The default expectation is a JSON body on `200`.
    #[must_use]
    pub fn new(method: Method, template: PathTemplate) -> Self {
        Self {
            method,
            template,
            path_params: PathParams::new(),
            query: QueryParams::new(),
            body: None,
            headers: HashMap::new(),
            expectation: Expectation::json(200),
        }
    }

    /// Set a path parameter.
    #[must_use]
    pub fn path(mut self, name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.path_params.insert(name, value);
        self
    }

    /// Replace all path parameters.
    #[must_use]
    pub fn path_params(mut self, params: PathParams) -> Self {
        self.path_params = params;
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(name, value);
        self
    }

    /// Append a query parameter that may be absent.
    #[must_use]
    pub fn query_opt<V: Into<QueryValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.query.insert_opt(name, value);
        self
    }

    /// Replace all query parameters.
    #[must_use]
    pub fn query_params(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Append the fields of a serializable parameter struct as query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized as a flat form.
    pub fn query_serialize<T: serde::Serialize>(mut self, value: &T) -> Result<Self> {
        self.query.extend_serialize(value)?;
        Ok(self)
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        Ok(self.body(Body::json(value)?))
    }

    /// Override a header. Overrides win over every default the client adds.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the expectation table.
    #[must_use]
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectation = expectation;
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path template.
    #[must_use]
    pub const fn template(&self) -> PathTemplate {
        self.template
    }

    /// Query parameters.
    #[must_use]
    pub const fn query_parameters(&self) -> &QueryParams {
        &self.query
    }

    /// Expectation table.
    #[must_use]
    pub const fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// Resolve into a transport-ready request.
    ///
    /// Resolution is deterministic: the same descriptor always yields an
    /// equal [`Request`]. It adds `Accept` and, when a body is present,
    /// `Content-Type: application/json`, unless the caller overrode them.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingPathParameter`](crate::Error::MissingPathParameter)
    /// or [`Error::InvalidTemplate`](crate::Error::InvalidTemplate) before
    /// any I/O happens, or if the body cannot be serialized.
    pub fn resolve(&self) -> Result<Request<Bytes>> {
        let path = self.template.resolve(&self.path_params)?;
        let query = self.query.to_query_string();
        let target = if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        };

        let mut request = Request::builder(self.method, target)
            .headers(self.headers.clone())
            .build();

        let accept = if self.expectation.accepts_json() {
            ContentType::Json.as_str()
        } else {
            "*/*"
        };
        request.set_header_if_absent("Accept", accept);

        if let Some(body) = &self.body {
            request.set_header_if_absent("Content-Type", ContentType::Json.as_str());
            request.body = Some(body.to_bytes()?);
        }

        Ok(request)
    }
}

/// A resolved HTTP request: method, base-relative target, headers, and
/// optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<B = Bytes> {
    method: Method,
    target: String,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, target: impl Into<String>) -> RequestBuilder<B> {
        RequestBuilder::new(method, target)
    }

    /// Reassemble a request from its parts.
    #[must_use]
    pub fn from_parts(
        method: Method,
        target: String,
        headers: HashMap<String, String>,
        body: Option<B>,
    ) -> Self {
        Self {
            method,
            target,
            headers,
            body,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path and query, relative to the Jira base URL (e.g. `/rest/api/3/myself`).
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Path part of the target.
    #[must_use]
    pub fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map_or(self.target.as_str(), |(path, _)| path)
    }

    /// Query part of the target, without the `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }

    /// Absolute URL of the target on `base`.
    ///
    /// Any path prefix of `base` (e.g. `https://example.com/jira/`) is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn url_on(&self, base: &Url) -> Result<Url> {
        base.join(self.target.trim_start_matches('/'))
            .map_err(Into::into)
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns `true` if a header of this name is present, ignoring case.
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Insert a header unless one of the same name is already present.
    ///
    /// Returns `true` if the header was inserted.
    pub fn set_header_if_absent(&mut self, name: &str, value: impl Into<String>) -> bool {
        if self.has_header(name) {
            return false;
        }
        self.headers.insert(name.to_string(), value.into());
        true
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, target, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, String, HashMap<String, String>, Option<B>) {
        (self.method, self.target, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances by hand.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    target: String,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends a query parameter to the target.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        let pair = form_urlencoded::Serializer::new(String::new())
            .append_pair(name, value)
            .finish();
        let separator = if self.target.contains('?') { '&' } else { '?' };
        self.target.push(separator);
        self.target.push_str(&pair);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            target: self.target,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl RequestBuilder<Bytes> {
    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self.header("Content-Type", ContentType::Json.as_str()).body(body))
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;
    use crate::{Decode, Error};

    fn update_priority() -> RequestDescriptor {
        RequestDescriptor::new(Method::Put, PathTemplate::new("/rest/api/3/priority/{id}"))
            .path("id", 3)
            .query("notify", false)
            .body(Body::Json(json!({"name": "Major", "statusColor": "#f79232"})))
            .expect(Expectation::no_content())
    }

    #[test]
    fn resolve_builds_target_and_body() {
        let request = update_priority().resolve().expect("resolve");

        check!(request.method() == Method::Put);
        check!(request.target() == "/rest/api/3/priority/3?notify=false");
        check!(request.path() == "/rest/api/3/priority/3");
        check!(request.query() == Some("notify=false"));
        check!(request.header("Content-Type") == Some("application/json"));
        let_assert!(Some(body) = request.body());
        let value: serde_json::Value = serde_json::from_slice(body).expect("json");
        check!(value == json!({"name": "Major", "statusColor": "#f79232"}));
    }

    #[test]
    fn resolve_is_deterministic() {
        let descriptor = update_priority().query("expand", vec!["a", "b"]);
        let first = descriptor.resolve().expect("first");
        let second = descriptor.resolve().expect("second");
        assert_eq!(first, second);
        assert_eq!(first.target().as_bytes(), second.target().as_bytes());
        assert_eq!(first.body(), second.body());
    }

    #[test]
    fn resolve_without_query_has_no_question_mark() {
        let request = RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/myself"))
            .query_opt("expand", None::<String>)
            .resolve()
            .expect("resolve");
        assert_eq!(request.target(), "/rest/api/3/myself");
        assert_eq!(request.query(), None);
    }

    #[test]
    fn resolve_respects_header_overrides() {
        let request = update_priority()
            .header("content-type", "application/json; charset=utf-8")
            .header("ACCEPT", "text/plain")
            .resolve()
            .expect("resolve");

        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.header("Content-Type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(request.header("accept"), Some("text/plain"));
    }

    #[test]
    fn resolve_without_body_sets_no_content_type() {
        let request = RequestDescriptor::new(Method::Get, PathTemplate::new("/rest/api/3/priority/search"))
            .resolve()
            .expect("resolve");
        assert!(!request.has_header("content-type"));
        assert!(request.body().is_none());
    }

    #[test]
    fn resolve_text_only_expectation_accepts_anything() {
        let request = RequestDescriptor::new(Method::Get, PathTemplate::new("/status"))
            .expect(Expectation::new().on(200, Decode::Text))
            .resolve()
            .expect("resolve");
        assert_eq!(request.header("Accept"), Some("*/*"));
    }

    #[test]
    fn resolve_text_body_is_sent_verbatim() {
        let request = RequestDescriptor::new(Method::Post, PathTemplate::new("/rest/api/3/group"))
            .body(Body::Text(r#"{"name":"ops"}"#.to_string()))
            .resolve()
            .expect("resolve");
        assert_eq!(
            request.body().map(|body| body.to_vec()),
            Some(br#"{"name":"ops"}"#.to_vec())
        );
    }

    #[test]
    fn resolve_missing_path_parameter_fails_fast() {
        let result = RequestDescriptor::new(Method::Delete, PathTemplate::new("/rest/api/3/group/{groupId}"))
            .resolve();
        let_assert!(Err(Error::MissingPathParameter { name, .. }) = result);
        check!(name == "groupId");
    }

    #[test]
    fn url_on_keeps_base_prefix() {
        let request = Request::<Bytes>::builder(Method::Get, "/rest/api/3/myself")
            .query("expand", "groups")
            .build();

        let base = Url::parse("https://example.atlassian.net/").expect("url");
        assert_eq!(
            request.url_on(&base).expect("join").as_str(),
            "https://example.atlassian.net/rest/api/3/myself?expand=groups"
        );

        let prefixed = Url::parse("https://jira.example.com/jira/").expect("url");
        assert_eq!(
            request.url_on(&prefixed).expect("join").as_str(),
            "https://jira.example.com/jira/rest/api/3/myself?expand=groups"
        );
    }

    #[test]
    fn set_header_if_absent_ignores_case() {
        let mut request = Request::<Bytes>::builder(Method::Get, "/")
            .header("authorization", "Bearer explicit")
            .build();
        assert!(!request.set_header_if_absent("Authorization", "Basic injected"));
        assert_eq!(request.header("AUTHORIZATION"), Some("Bearer explicit"));
        assert!(request.set_header_if_absent("X-Atlassian-Token", "no-check"));
    }

    #[test]
    fn request_builder_json() {
        #[derive(serde::Serialize)]
        struct Group {
            name: String,
        }

        let request = Request::builder(Method::Post, "/rest/api/3/group")
            .json(&Group {
                name: "jira-ops".to_string(),
            })
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.body().is_some());
    }
}
