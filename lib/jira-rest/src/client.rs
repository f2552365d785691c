//! The Jira client: configuration, transport stack and dispatch.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use jira_rest_core::{Envelope, RequestDescriptor, TransportExt};
use tower::util::BoxCloneService;
use tower::{Layer, ServiceExt};
use tower_service::Service;
use tracing::{debug, instrument};

use crate::{
    Auth, Error, Request, Response, Result,
    config::{JiraConfig, JiraConfigBuilder},
    middleware::{AuthLayer, LoggingLayer},
    transport::HyperTransport,
};

#[cfg(feature = "middleware-concurrency")]
use tower::limit::ConcurrencyLimitLayer;

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased transport service.
///
/// Both the direct transport and a host bridge end up as one of these,
/// wrapped in whatever layers the builder was given.
pub type BoxedService = BoxCloneService<Request<Bytes>, Response<Bytes>, Error>;

/// Future returned by [`JiraClient::dispatch`].
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response<Bytes>>> + Send + 'static>>;

/// Thread-safe wrapper for `BoxedService`.
///
/// `BoxCloneService` is `Send` but not `Sync`; every call works on its own
/// clone, so the lock is held only while cloning.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request<Bytes>) -> ServiceFuture {
        let service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(service.oneshot(request))
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// Jira Cloud REST client.
///
/// Holds the read-only configuration and the transport stack. Cheap to
/// clone; clones share the connection pool.
///
/// # Example
///
/// ```ignore
/// use jira_rest::{Auth, JiraClient};
///
/// let client = JiraClient::builder()
///     .base_url("https://your-domain.atlassian.net")
///     .auth(Auth::basic("me@example.com", "api-token"))
///     .with_logging()
///     .build()?;
///
/// let priority = client.priorities().get_priority("3").await?;
/// ```
#[derive(Clone)]
pub struct JiraClient {
    service: SyncService,
    config: Arc<JiraConfig>,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// Create a client using the direct HTTPS transport and no extra layers.
    #[must_use]
    pub fn new(config: JiraConfig) -> Self {
        let config = Arc::new(config);
        let transport: BoxedService = BoxCloneService::new(HyperTransport::new(Arc::clone(&config)));
        Self::assemble(transport, config, Vec::new())
    }

    /// Create a client from `JIRA_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the environment is incomplete.
    pub fn from_env() -> Result<Self> {
        JiraConfig::from_env().map(Self::new)
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> JiraClientBuilder {
        JiraClientBuilder::default()
    }

    fn assemble(transport: BoxedService, config: Arc<JiraConfig>, layers: Vec<LayerFn>) -> Self {
        let mut service = BoxCloneService::new(AuthLayer::new(&config.auth).layer(transport));

        for layer_fn in layers {
            service = layer_fn(service);
        }

        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Get the client configuration.
    #[must_use]
    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Send a resolved request through the transport stack, exactly once.
    ///
    /// Any status code comes back as `Ok`; only transport failures are errors.
    pub fn dispatch(&self, request: Request<Bytes>) -> ServiceFuture {
        self.service.call(request)
    }

    /// Resolve, dispatch and interpret one API call.
    ///
    /// Runs [`TransportExt::send`] over this client's transport stack.
    ///
    /// # Errors
    ///
    /// - contract violations (missing path parameter) before any I/O
    /// - transport failures
    /// - [`Error::Decode`] when a declared status carries an undecodable body
    ///
    /// Statuses the descriptor did not declare come back as
    /// [`Envelope::Failure`], not as an error.
    #[instrument(
        skip(self, descriptor),
        fields(method = %descriptor.method(), template = %descriptor.template())
    )]
    pub async fn send<T: serde::de::DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Envelope<T>> {
        let envelope = TransportExt::send::<T>(self, descriptor).await;
        match &envelope {
            Ok(envelope) => debug!(
                status = envelope.status(),
                success = envelope.is_success(),
                "response interpreted"
            ),
            Err(err) => debug!(status = ?err.status(), error = %err, "request failed"),
        }
        envelope
    }
}

impl jira_rest_core::Transport for JiraClient {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        self.dispatch(request)
    }
}

impl Service<Request<Bytes>> for JiraClient {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> std::task::Poll<Result<()>> {
        // Readiness is checked on the per-call clone inside `dispatch`.
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        self.dispatch(request)
    }
}

// ============================================================================
// Builder
// ============================================================================

type LayerFn = Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>;

/// Builder for [`JiraClient`].
///
/// # Example
///
/// ```ignore
/// use jira_rest::{Auth, JiraClient, Response};
///
/// // Host-provided request primitive, e.g. a sandboxed runtime's fetch.
/// let client = JiraClient::builder()
///     .base_url("https://your-domain.atlassian.net")
///     .bridge(|request| async move { host_fetch(request).await })
///     .build()?;
/// ```
#[derive(Default)]
pub struct JiraClientBuilder {
    config: JiraConfigBuilder,
    bridge: Option<BoxedService>,
    layers: Vec<LayerFn>,
}

impl std::fmt::Debug for JiraClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClientBuilder")
            .field("config", &self.config)
            .field("bridge", &self.bridge.is_some())
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl JiraClientBuilder {
    // ========================================================================
    // Core Configuration
    // ========================================================================

    /// Start from a prepared configuration builder.
    #[must_use]
    pub fn config(mut self, config: JiraConfigBuilder) -> Self {
        self.config = config;
        self
    }

    /// Set the site base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Set the credentials.
    #[must_use]
    pub fn auth(mut self, auth: Auth) -> Self {
        self.config = self.config.auth(auth);
        self
    }

    /// Set the request timeout. Without one, requests wait indefinitely.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Set the `User-Agent` header sent by the direct transport.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    // ========================================================================
    // Transport Selection
    // ========================================================================

    /// Route requests through a host-provided request primitive instead of
    /// the direct HTTPS transport.
    ///
    /// The function receives requests with a base-relative target; the host
    /// decides where they go and usually supplies credentials itself, so
    /// pair this with [`Auth::Ambient`].
    #[must_use]
    pub fn bridge<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Request<Bytes>) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>>> + Send + 'static,
    {
        self.bridge = Some(BoxCloneService::new(tower::service_fn(f)));
        self
    }

    // ========================================================================
    // Generic Middleware API
    // ========================================================================

    /// Add a Tower layer around the transport stack.
    ///
    /// Each layer wraps the ones added before it.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request<Bytes>>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Add request/response logging at info level.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add debug-level logging (includes header names).
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    /// Add concurrency limiting.
    #[cfg(feature = "middleware-concurrency")]
    #[must_use]
    pub fn with_concurrency_limit(self, max: usize) -> Self {
        self.layer(ConcurrencyLimitLayer::new(max))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn build(self) -> Result<JiraClient> {
        let config = Arc::new(self.config.build()?);
        let transport = match self.bridge {
            Some(bridge) => bridge,
            None => BoxCloneService::new(HyperTransport::new(Arc::clone(&config))),
        };
        Ok(JiraClient::assemble(transport, config, self.layers))
    }
}
