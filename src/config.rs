use crate::constants;
use crate::error::LookupError;

/// Environment variable overriding the base URI (useful for pointing the
/// client at a mock server).
pub const ENV_BASE_URI: &str = "MLB_LOOKUP_BASE_URI";

/// Environment variable overriding the HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT: &str = "MLB_LOOKUP_HTTP_TIMEOUT";

/// Client configuration.
///
/// There is no config file and nothing is persisted; defaults point at
/// the production lookup service and environment variables override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URI requests are issued against. Must include the scheme.
    pub base_uri: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_uri: constants::BASE_URI.to_string(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Builds the configuration from defaults, applying environment
    /// overrides where present.
    ///
    /// # Environment Variables
    /// - `MLB_LOOKUP_BASE_URI` - Override the service base URI
    /// - `MLB_LOOKUP_HTTP_TIMEOUT` - Override the HTTP timeout in seconds
    pub fn from_env() -> Result<Self, LookupError> {
        let mut config = Config::default();

        if let Ok(base_uri) = std::env::var(ENV_BASE_URI) {
            config.base_uri = base_uri;
        }

        if let Some(timeout) = std::env::var(ENV_HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.base_uri.trim().is_empty() {
            return Err(LookupError::config_error("Base URI must not be empty"));
        }
        if !self.base_uri.starts_with("http://") && !self.base_uri.starts_with("https://") {
            return Err(LookupError::config_error(format!(
                "Base URI '{}' must include an http:// or https:// scheme",
                self.base_uri
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(LookupError::config_error(
                "HTTP timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}
