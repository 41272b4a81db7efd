//! Orbita API client configuration.
//!
//! Configures the backend base URL and request timeout. Defaults point at
//! a local development server; override via environment variables or
//! explicit construction for deployment and tests.

use url::Url;

/// Default backend base URL for local development.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Configuration for connecting to the Orbita API.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the backend.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SiteConfig {
    /// Create a configuration for an explicit base URL with the default
    /// timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `ORBITA_API_URL` (default: `http://127.0.0.1:8080`)
    /// - `ORBITA_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("ORBITA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw, e.to_string()))?;

        Ok(Self {
            base_url,
            timeout_secs: std::env::var("ORBITA_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured base URL could not be parsed.
    #[error("invalid ORBITA_API_URL \"{0}\": {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let cfg = SiteConfig::new(DEFAULT_API_URL.parse().unwrap());
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/");
    }
}
