//! Prelude module for convenient imports.
//!
//! ```ignore
//! use jira_rest_core::prelude::*;
//! ```

pub use crate::{
    ApiError, Body, Decode, Envelope, Error, Expectation, Method, PathParams, PathTemplate,
    Payload, QueryParams, QueryValue, Request, RequestDescriptor, Response, Result, Transport,
    TransportExt, interpret,
};
