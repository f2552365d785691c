//! Credential injection middleware.
//!
//! Adds the configured credential to every outgoing request unless the
//! request already carries a header of the same name.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};

use crate::{Auth, Error, Request, Response, Result};

/// Layer that injects [`Auth`] credentials into requests.
///
/// # Example
///
/// ```ignore
/// use jira_rest::{Auth, middleware::AuthLayer};
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(AuthLayer::new(&Auth::basic("me@example.com", "api-token")))
///     .service(transport);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuthLayer {
    credential: Option<(&'static str, Arc<str>)>,
}

impl AuthLayer {
    /// Create a layer for the given credentials.
    #[must_use]
    pub fn new(auth: &Auth) -> Self {
        Self {
            credential: auth
                .header()
                .map(|(name, value)| (name, Arc::from(value))),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            credential: self.credential.clone(),
        }
    }
}

/// Service that injects credentials into requests.
#[derive(Debug, Clone)]
pub struct AuthService<S> {
    inner: S,
    credential: Option<(&'static str, Arc<str>)>,
}

impl<S> Service<Request<Bytes>> for AuthService<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Bytes>) -> Self::Future {
        if let Some((name, value)) = &self.credential {
            request.set_header_if_absent(name, value.as_ref());
        }

        // Call the service that was polled ready, keep the clone for next time.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use tower::{ServiceExt, service_fn};

    use super::*;
    use crate::Method;

    async fn echo_headers(request: Request<Bytes>) -> Result<Response<Bytes>> {
        let (_, _, headers, _) = request.into_parts();
        Ok(Response::new(200, headers, Bytes::new()))
    }

    #[tokio::test]
    async fn injects_bearer_token() {
        let service = AuthLayer::new(&Auth::bearer("tok")).layer(service_fn(echo_headers));
        let request = Request::builder(Method::Get, "/rest/api/3/myself").build();

        let response = service.oneshot(request).await.expect("response");

        assert_eq!(response.header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn session_cookie_goes_in_cookie_header() {
        let service = AuthLayer::new(&Auth::session("JSESSIONID=abc")).layer(service_fn(echo_headers));
        let request = Request::builder(Method::Get, "/rest/api/3/myself").build();

        let response = service.oneshot(request).await.expect("response");

        assert_eq!(response.header("Cookie"), Some("JSESSIONID=abc"));
        assert_eq!(response.header("Authorization"), None);
    }

    #[tokio::test]
    async fn never_overwrites_explicit_header() {
        let service = AuthLayer::new(&Auth::basic("me@example.com", "tok")).layer(service_fn(echo_headers));
        let request = Request::builder(Method::Get, "/rest/api/3/myself")
            .header("authorization", "Bearer explicit")
            .build();

        let response = service.oneshot(request).await.expect("response");

        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.header("Authorization"), Some("Bearer explicit"));
    }

    #[tokio::test]
    async fn ambient_adds_nothing() {
        let service = AuthLayer::new(&Auth::Ambient).layer(service_fn(echo_headers));
        let request = Request::builder(Method::Get, "/rest/api/3/myself").build();

        let response = service.oneshot(request).await.expect("response");

        assert!(response.headers().is_empty());
    }
}
