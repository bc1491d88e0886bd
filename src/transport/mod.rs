//! HTTP transport to the classification backend.

mod http;

pub use http::{HttpTransport, RawResponse, TransportError, REQUEST_ID_HEADER};
