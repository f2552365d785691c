//! Transport trait and the request pipeline built on it.
//!
//! - [`Transport`] - sends one resolved request and returns the raw response
//! - [`TransportExt`] - resolve, dispatch and interpret in one call
//!
//! Implement [`Transport`] directly for custom transports or testing.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Envelope, Request, RequestDescriptor, Response, Result, interpret};

/// Core transport trait.
///
/// An implementation performs exactly one network exchange per call and
/// returns the response for every status code. Only failures that prevent
/// a response from being obtained are errors:
/// - Network errors
/// - TLS errors
/// - Timeouts
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a transport error if no response could be obtained.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}

/// Extension trait running the full descriptor pipeline over a [`Transport`].
pub trait TransportExt: Transport {
    /// Resolve the descriptor, execute it once, and interpret the response.
    ///
    /// A missing path parameter fails before the transport is called.
    ///
    /// # Errors
    ///
    /// Returns contract, transport, or decode errors; application errors
    /// are reported as [`Envelope::Failure`].
    fn send<T: serde::de::DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> impl Future<Output = Result<Envelope<T>>> + Send {
        let resolved = descriptor.resolve();
        let expectation = descriptor.expectation().clone();
        async move {
            let response = self.execute(resolved?).await?;
            interpret(response, &expectation)
        }
    }
}

// Blanket implementation for all Transport implementors
impl<T: Transport + ?Sized> TransportExt for T {}
