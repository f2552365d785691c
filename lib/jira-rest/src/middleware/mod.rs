//! Tower middleware layers for the Jira client.
//!
//! Layers wrap the transport service. The client always installs
//! [`AuthLayer`] directly around the transport; anything added through
//! [`JiraClientBuilder::layer`](crate::JiraClientBuilder::layer) wraps
//! that, the last layer added being the first to see a request.
//!
//! # Available Layers
//!
//! - [`AuthLayer`] - Injects `Authorization` or `Cookie` credentials
//! - [`LoggingLayer`] - Logs exchanges using `tracing`
//! - [`ConcurrencyLimitLayer`] - Limits concurrent requests (from tower)
//!
//! No retry layer is provided: many Jira writes are not idempotent.
//!
//! # Example
//!
//! ```ignore
//! use jira_rest::JiraClient;
//! use jira_rest::middleware::ConcurrencyLimitLayer;
//!
//! let client = JiraClient::builder()
//!     .base_url("https://your-domain.atlassian.net")
//!     .with_logging()
//!     .layer(ConcurrencyLimitLayer::new(8))
//!     .build()?;
//! ```

mod auth;
mod logging;

pub use auth::{AuthLayer, AuthService};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::{Layer, ServiceBuilder};
