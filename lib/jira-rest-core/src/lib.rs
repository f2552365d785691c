//! Core types and traits for the Jira Cloud REST client.
//!
//! This crate holds everything that does not touch the network:
//! - [`PathTemplate`] and [`PathParams`] - URL template resolution
//! - [`QueryParams`] and [`QueryValue`] - query string serialization
//! - [`RequestDescriptor`] - one endpoint call before resolution
//! - [`Request`] and [`Response`] - transport-level messages
//! - [`Expectation`] - declared success statuses and decode strategies
//! - [`interpret`] - response interpretation into an [`Envelope`]
//! - [`Transport`] - the seam where an HTTP implementation plugs in
//! - [`Error`] and [`Result`] - error handling
//! - [`StatusCode`] and [`header`] - re-exported from the `http` crate

mod body;
mod envelope;
mod error;
mod expect;
mod interpret;
mod method;
mod path_template;
pub mod prelude;
mod query;
mod request;
mod response;
mod transport;

pub use body::{ContentType, from_json, to_json};
pub use envelope::{ApiError, Envelope, ErrorBody, ErrorCollection, Payload};
pub use error::{Error, Result};
pub use expect::{Decode, Expectation, StatusMatch};
pub use interpret::interpret;
pub use method::Method;
pub use path_template::{PathParams, PathTemplate};
pub use query::{QueryParams, QueryValue};
pub use request::{Body, Request, RequestBuilder, RequestDescriptor};
pub use response::Response;
pub use transport::{Transport, TransportExt};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};

/// Types that can be flattened into query parameter pairs.
///
/// List values expand into one pair per element, in order.
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}
