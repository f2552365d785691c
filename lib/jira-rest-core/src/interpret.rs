//! Response interpretation against an expectation table.

use bytes::Bytes;

use crate::{ApiError, Decode, Envelope, ErrorBody, Expectation, Payload, Response, Result};

/// Turn a raw response into an [`Envelope`].
///
/// A declared status is decoded with its declared strategy; an undeclared
/// status becomes [`Envelope::Failure`] with a best-effort decoded body and
/// is never an `Err`.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) when a declared status
/// carries a body that does not decode under the declared strategy.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use bytes::Bytes;
/// use jira_rest_core::{Envelope, Expectation, Response, interpret};
///
/// let response = Response::new(404, HashMap::new(), Bytes::from("Not Found"));
/// let envelope = interpret::<serde_json::Value>(response, &Expectation::json(200)).unwrap();
/// assert!(matches!(envelope, Envelope::Failure(ref err) if err.is_not_found()));
/// ```
pub fn interpret<T: serde::de::DeserializeOwned>(
    response: Response<Bytes>,
    expectation: &Expectation,
) -> Result<Envelope<T>> {
    let status = response.status();
    let Some(decode) = expectation.decode_for(status) else {
        let body = decode_error_body(&response);
        let (status, headers, _) = response.into_parts();
        return Ok(Envelope::Failure(ApiError::new(status, headers, body)));
    };

    let payload = match decode {
        Decode::Json => Payload::Json(response.json()?),
        Decode::Text => Payload::Text(response.text()?),
        Decode::None => Payload::Empty,
    };
    let (status, headers, _) = response.into_parts();
    Ok(Envelope::Success {
        status,
        headers,
        payload,
    })
}

fn decode_error_body(response: &Response<Bytes>) -> ErrorBody {
    let body = response.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return ErrorBody::Empty;
    }
    if response.is_json()
        && let Ok(value) = serde_json::from_slice(body)
    {
        return ErrorBody::Json(value);
    }
    ErrorBody::Text(String::from_utf8_lossy(body).into_owned())
}
