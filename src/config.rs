//! Gateway configuration.
//!
//! Configuration is explicit: it is built once (from the environment, a YAML
//! file or code) and handed to the gateway at construction. Nothing in the
//! request path reads ambient state.

use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Upload size advertised to users. Never enforced by validation.
pub const ADVERTISED_UPLOAD_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: Url,
    /// `None` means no application-level timeout.
    pub request_timeout: Option<Duration>,
    pub proxy_url: Option<String>,
    pub advertised_upload_limit_bytes: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: None,
            proxy_url: None,
            advertised_upload_limit_bytes: ADVERTISED_UPLOAD_LIMIT_BYTES,
        }
    }
}

/// On-disk representation accepted by [`GatewayConfig::from_yaml_file`].
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    proxy_url: Option<String>,
}

impl GatewayConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Build from environment variables.
    ///
    /// - `ECG_API_URL` (default `http://localhost:8000`)
    /// - `ECG_HTTP_TIMEOUT_SECS` (unset means no timeout)
    /// - `ECG_PROXY_URL`
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("ECG_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let request_timeout = match env::var("ECG_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout_secs(&raw, "ECG_HTTP_TIMEOUT_SECS")?),
            Err(_) => None,
        };
        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            request_timeout,
            proxy_url: env::var("ECG_PROXY_URL").ok().filter(|s| !s.is_empty()),
            advertised_upload_limit_bytes: ADVERTISED_UPLOAD_LIMIT_BYTES,
        })
    }

    /// Load from a YAML file. Missing keys fall back to defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_details(format!("file: {}", path.display())),
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: FileConfig = if content.trim().is_empty() {
            FileConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid config file: {}", e),
                    ErrorContext::new().with_source("config_loader"),
                )
            })?
        };
        let base_url = file.base_url.as_deref().unwrap_or(DEFAULT_API_URL);
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
            proxy_url: file.proxy_url,
            advertised_upload_limit_bytes: ADVERTISED_UPLOAD_LIMIT_BYTES,
        })
    }

    /// Absolute URL for an API path such as `/predict/`.
    ///
    /// Any path prefix on the base URL is preserved.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL '{}': {}", raw, e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("config"),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported URL scheme '{}'", url.scheme()),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details("expected http or https")
                .with_source("config"),
        ));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str, key: &str) -> Result<Duration> {
    raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
        Error::configuration_with_context(
            format!("'{}' is not a number of seconds", raw),
            ErrorContext::new().with_field_path(key).with_source("config"),
        )
    })
}
