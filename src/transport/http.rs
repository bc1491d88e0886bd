use crate::config::GatewayConfig;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::{Proxy, StatusCode};
use tracing::debug;
use uuid::Uuid;

/// Header carrying our per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A response that made it back from the backend, body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
    pub request_id: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Thin wrapper over `reqwest::Client` bound to one backend.
///
/// One call here is exactly one HTTP request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpTransport {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn get(&self, path: &str) -> std::result::Result<RawResponse, TransportError> {
        let url = self.config.endpoint(path);
        self.send(self.client.get(&url), "GET", &url).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> std::result::Result<RawResponse, TransportError> {
        let url = self.config.endpoint(path);
        self.send(self.client.post(&url).multipart(form), "POST", &url)
            .await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> std::result::Result<RawResponse, TransportError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, method, url, "sending request");

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(TransportError::Connect)?;

        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::Body)?;
        debug!(%request_id, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            body,
            request_id,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused, reset, timeout).
    #[error("HTTP request failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Response headers arrived but the body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}
