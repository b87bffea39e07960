use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Default NOD Marketplace API origin.
pub const DEFAULT_API_URL: &str = "https://api.b2b.nod.ro";

/// Credentials and endpoint configuration for the NOD Marketplace API.
///
/// The username/password pair is the web-service account; the password is the
/// shared secret used as the HMAC key and must never appear in logs or
/// serialized output.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    pub username: Secret<String>,
    pub password: Secret<String>,
    pub api_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for MarketplaceConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("MarketplaceConfig", 3)?;
        state.serialize_field("username", "[REDACTED]")?;
        state.serialize_field("password", "[REDACTED]")?;
        state.serialize_field("api_url", &self.api_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for MarketplaceConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MarketplaceConfigHelper {
            username: String,
            password: String,
            api_url: Option<String>,
        }

        let helper = MarketplaceConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            username: Secret::new(helper.username),
            password: Secret::new(helper.password),
            api_url: helper.api_url,
        })
    }
}

impl MarketplaceConfig {
    /// Create a new configuration with web-service credentials
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self {
            username: Secret::new(username),
            password: Secret::new(password),
            api_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `NOD_USERNAME`
    /// - `NOD_PASSWORD`
    /// - `NOD_API_URL` (optional, defaults to the production origin)
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = env::var("NOD_USERNAME")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("NOD_USERNAME".to_string()))?;

        let password = env::var("NOD_PASSWORD")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("NOD_PASSWORD".to_string()))?;

        let api_url = env::var("NOD_API_URL").ok();

        Ok(Self {
            username: Secret::new(username),
            password: Secret::new(password),
            api_url,
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// Loads environment variables from `.env` in the working directory (if it
    /// exists), then reads the configuration with [`Self::from_env`].
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file() -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Check if this configuration has credentials for signed requests
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.expose_secret().is_empty() && !self.password.expose_secret().is_empty()
    }

    /// Set a custom base URL
    #[must_use]
    pub fn api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Get the username (use carefully - exposes secret)
    pub fn username(&self) -> &str {
        self.username.expose_secret()
    }

    /// Get the password (use carefully - exposes secret)
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
