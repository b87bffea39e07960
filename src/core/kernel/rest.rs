use crate::core::errors::MarketplaceError;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, trace};

/// Characters left untouched match JavaScript's `encodeURIComponent`, which
/// is what the service's own clients use for query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// REST client trait for making HTTP requests
///
/// The marketplace API is read-only, so the surface is GET-only.
/// Implementations handle signing; callers supply the path component and an
/// ordered list of query parameters. Keeping this a trait keeps dispatch and
/// normalization testable without a network or a running host.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path, without the query string
    /// * `query_params` - Query parameters in the order they must appear
    ///
    /// # Returns
    /// The response body as a JSON value
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, MarketplaceError>;

    /// Make a GET request with strongly-typed response
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, MarketplaceError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API (a trailing slash is stripped)
    pub base_url: String,
    /// Service name for logging and tracing
    pub service_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    pub fn new(base_url: String, service_name: String) -> Self {
        Self {
            base_url,
            service_name,
            timeout_seconds: 30,
            user_agent: "nodws/0.1".to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(mut self) -> Result<ReqwestRest, MarketplaceError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                MarketplaceError::Other(format!("Failed to build HTTP client: {}", e))
            })?;

        // The path component always starts with '/'
        while self.config.base_url.ends_with('/') {
            self.config.base_url.pop();
        }

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
///
/// Every request is signed; building a client without a signer yields an
/// `AuthError` on first use. No retry or backoff is performed here - a
/// transport failure propagates unmodified to the caller.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

/// Encode an ordered parameter list as a query string
///
/// Each value is percent-encoded individually; keys are emitted as-is and
/// order is preserved exactly.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

impl ReqwestRest {
    /// Build the full URL for an endpoint and encoded query string
    fn build_url(&self, endpoint: &str, query_string: &str) -> String {
        if query_string.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query_string)
        }
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(service = %self.config.service_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, MarketplaceError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            MarketplaceError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                MarketplaceError::DeserializationError(format!(
                    "Failed to parse JSON response: {}",
                    e
                ))
            })
        } else {
            Err(MarketplaceError::ApiError {
                code: i32::from(status.as_u16()),
                message: response_text,
            })
        }
    }

    /// Make one signed request
    ///
    /// Only the path component is passed to the signer; the query string is
    /// not part of the signed message.
    #[instrument(skip(self, query_params), fields(service = %self.config.service_name, method = %method, endpoint = %endpoint))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, MarketplaceError> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            MarketplaceError::AuthError(
                "Authentication required but no signer provided".to_string(),
            )
        })?;

        let query_string = encode_query(query_params);
        let url = self.build_url(endpoint, &query_string);

        let mut request = self.client.request(method.clone(), &url);

        let headers = signer.sign_request(method.as_str(), endpoint)?;
        for (key, value) in headers {
            request = request.header(&key, &value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MarketplaceError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params), fields(service = %self.config.service_name, endpoint = %endpoint, param_count = query_params.len()))]
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, MarketplaceError> {
        self.make_request(Method::GET, endpoint, query_params).await
    }

    #[instrument(skip(self, query_params), fields(service = %self.config.service_name, endpoint = %endpoint, param_count = query_params.len()))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, MarketplaceError> {
        self.make_request(Method::GET, endpoint, query_params)
            .await
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| {
                    MarketplaceError::DeserializationError(format!(
                        "Failed to deserialize JSON: {}",
                        e
                    ))
                })
            })
    }
}
