//! Mapping of raw backend responses onto results and [`RequestError`]s.

use crate::error::RequestError;
use crate::transport::{RawResponse, TransportError};
use serde::de::DeserializeOwned;

/// Decode a response body, or classify why it cannot be decoded.
///
/// - 2xx with the expected shape → `Ok`
/// - 2xx with any other body → `MalformedResponse`
/// - non-2xx with a non-empty string `detail` → `ServerMessage`
/// - non-2xx otherwise → `Unknown`
pub(crate) fn decode_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, RequestError> {
    let status = raw.status.as_u16();
    if raw.is_success() {
        return serde_json::from_slice::<T>(&raw.body).map_err(|e| {
            RequestError::MalformedResponse {
                details: format!("HTTP {}: {}", status, e),
            }
        });
    }

    match server_detail(&raw.body) {
        Some(message) => Err(RequestError::ServerMessage { status, message }),
        None => Err(RequestError::Unknown {
            details: format!("HTTP {} without a detail message", status),
        }),
    }
}

/// A failure below the HTTP layer. Only a request that never got a response
/// counts as a transport failure.
pub(crate) fn map_transport_error(err: TransportError) -> RequestError {
    match err {
        TransportError::Connect(e) => RequestError::TransportFailure {
            reason: e.to_string(),
        },
        TransportError::Body(e) => RequestError::Unknown {
            details: e.to_string(),
        },
    }
}

/// `detail` field of an error body, when it is a non-empty string.
///
/// FastAPI request-validation errors carry an array here; those are not
/// user-presentable and fall through to the generic message.
fn server_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
