use crate::core::config::{MarketplaceConfig, DEFAULT_API_URL};
use crate::core::errors::MarketplaceError;
use crate::core::kernel::{NodSigner, ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::marketplace::connector::NodConnector;
use std::sync::Arc;

/// Builder for creating NOD Marketplace connectors
///
/// Fluent configuration over credentials, base URL, and transport settings.
pub struct NodBuilder {
    config: MarketplaceConfig,
    rest_timeout: u64,
}

impl Default for NodBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodBuilder {
    /// Create a new `NodBuilder` with default settings
    pub fn new() -> Self {
        Self {
            config: MarketplaceConfig::new(String::new(), String::new()),
            rest_timeout: 30,
        }
    }

    /// Set the marketplace configuration
    pub fn with_config(mut self, config: MarketplaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set web-service credentials
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        let api_url = self.config.api_url.clone();
        self.config = MarketplaceConfig::new(username, password);
        self.config.api_url = api_url;
        self
    }

    /// Set a custom base URL for the REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.api_url = Some(base_url);
        self
    }

    /// Set the REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    /// Build the connector
    ///
    /// Credentials are required: every marketplace endpoint expects a signed
    /// request.
    pub fn build(self) -> Result<NodConnector<ReqwestRest>, MarketplaceError> {
        if !self.config.has_credentials() {
            return Err(MarketplaceError::AuthError(
                "NOD Marketplace credentials (username and password) are required".to_string(),
            ));
        }

        let base_url = self
            .config
            .api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let rest_config =
            RestClientConfig::new(base_url, "nod".to_string()).with_timeout(self.rest_timeout);

        let signer = Arc::new(NodSigner::new(
            self.config.username().to_string(),
            self.config.password().to_string(),
        ));

        let rest = RestClientBuilder::new(rest_config)
            .with_signer(signer)
            .build()?;

        Ok(NodConnector::new(&rest))
    }
}
