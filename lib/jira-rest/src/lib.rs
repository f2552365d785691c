//! Async client for the Jira Cloud REST API.
//!
//! Every call is described by a [`RequestDescriptor`] and runs through the
//! same pipeline: resolve the path template and query, dispatch once over a
//! tower transport stack, then interpret the response against the declared
//! [`Expectation`] into an [`Envelope`].
//!
//! # Example
//!
//! ```ignore
//! use jira_rest::prelude::*;
//! use jira_rest::services::SearchPriorities;
//!
//! let client = JiraClient::builder()
//!     .base_url("https://your-domain.atlassian.net")
//!     .auth(Auth::basic("me@example.com", "api-token"))
//!     .build()?;
//!
//! match client.priorities().search_priorities(&SearchPriorities::default()).await? {
//!     Envelope::Success { payload, .. } => println!("{:?}", payload.into_json()),
//!     Envelope::Failure(err) if err.is_unauthorized() => eprintln!("check the API token"),
//!     Envelope::Failure(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! Transport failures, undecodable success bodies and unfilled path
//! parameters are returned as [`Error`]; statuses the endpoint did not
//! declare come back as [`Envelope::Failure`].

mod auth;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
pub mod services;
mod transport;

pub use auth::Auth;
pub use client::{BoxedService, JiraClient, JiraClientBuilder, ServiceFuture};
pub use config::{JiraConfig, JiraConfigBuilder};
pub use transport::HyperTransport;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use jira_rest_core::{
    ApiError, Body, ContentType, Decode, Envelope, Error, ErrorBody, ErrorCollection, Expectation,
    Method, PathParams, PathTemplate, Payload, QueryParams, QueryValue, Request, RequestBuilder,
    RequestDescriptor, Response, Result, StatusMatch, ToQueryPairs, Transport, TransportExt,
    from_json, interpret, to_json,
};

// Re-export http types for status codes and headers
pub use jira_rest_core::{StatusCode, header};
