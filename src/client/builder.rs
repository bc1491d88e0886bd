use crate::client::gateway::ClassificationGateway;
use crate::config::GatewayConfig;
use crate::Result;
use std::time::Duration;

/// Builder for [`ClassificationGateway`].
///
/// Starts from [`GatewayConfig::default`]; use [`from_env`](Self::from_env) to
/// start from the environment instead. Explicit setters always win.
pub struct GatewayBuilder {
    config: Option<GatewayConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            base_url: None,
            timeout: None,
            proxy_url: None,
        }
    }

    /// Start from `ECG_API_URL` / `ECG_HTTP_TIMEOUT_SECS` / `ECG_PROXY_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new().config(GatewayConfig::from_env()?))
    }

    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bound every request. Without this, requests wait as long as the
    /// connection stays open.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    pub fn build_config(self) -> Result<GatewayConfig> {
        let mut config = self.config.unwrap_or_default();
        if let Some(url) = self.base_url {
            config.base_url = GatewayConfig::new(&url)?.base_url;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = Some(timeout);
        }
        if let Some(proxy) = self.proxy_url {
            config.proxy_url = Some(proxy);
        }
        Ok(config)
    }

    pub fn build(self) -> Result<ClassificationGateway> {
        ClassificationGateway::new(self.build_config()?)
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
