//! Client configuration.

use std::time::Duration;

use thiserror::Error;

/// Default API base URL (production).
///
/// Version paths (`/v1/`, `/v2/`) are part of the resource endpoints, not
/// the base URL.
pub const DEFAULT_BASE_URL: &str = "https://a7.deutsche-boerse.com/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Constant identifying header attached to every request.
pub(crate) const USER_AGENT: &str = concat!("a7-client/", env!("CARGO_PKG_VERSION"));

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but empty.
    #[error("environment variable is empty: {0}")]
    EmptyValue(String),
}

/// Configuration for an [`A7Client`](crate::A7Client).
///
/// All values are fixed once the client is constructed.
#[derive(Clone)]
pub struct A7Config {
    token: String,
    /// Base URL for the A7 API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether to verify TLS certificates. Disable only for self-signed
    /// certificates in dev environments.
    pub verify_tls: bool,
}

impl A7Config {
    /// Create a configuration with production defaults.
    ///
    /// The token may be supplied with or without the `Bearer ` prefix.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub const fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `A7_API_TOKEN` (required), `A7_BASE_URL` (optional) and
    /// `A7_VERIFY_SSL` (optional, `true`/`false` case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if `A7_API_TOKEN` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var("A7_API_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("A7_API_TOKEN".to_string()))?;
        if token.is_empty() {
            return Err(ConfigError::EmptyValue("A7_API_TOKEN".to_string()));
        }

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var("A7_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(verify) = std::env::var("A7_VERIFY_SSL") {
            config.verify_tls = !verify.eq_ignore_ascii_case("false");
        }
        Ok(config)
    }

    /// The raw API token as supplied.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for A7Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("A7Config")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = A7Config::new("token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.verify_tls);
    }

    #[test]
    fn builders_override_defaults() {
        let config = A7Config::new("token")
            .with_base_url("https://a7.deutsche-boerse.de/api")
            .with_timeout(Duration::from_secs(60))
            .with_verify_tls(false);
        assert_eq!(config.base_url, "https://a7.deutsche-boerse.de/api");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(!config.verify_tls);
    }

    #[test]
    fn debug_redacts_token() {
        let config = A7Config::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
