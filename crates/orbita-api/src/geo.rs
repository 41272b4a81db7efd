//! # Country-from-IP Lookup
//!
//! Resolves the submitting client's country through an external geo-IP
//! provider (ip-api.com by default). Lookup is best-effort: every failure
//! path — unresolvable address, timeout, non-success status, malformed
//! body — collapses to `"Unknown"` rather than failing the submission.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Default geo provider endpoint.
const DEFAULT_GEO_API_URL: &str = "http://ip-api.com";

/// Provider response for `GET /json/{ip}?fields=country`.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    country: Option<String>,
}

/// Client for the geo-IP provider.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GeoClient {
    /// Create a client against the given provider base URL.
    ///
    /// The request timeout is deliberately short — a slow provider must
    /// not stall quote intake.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Build a client from the environment.
    ///
    /// `GEO_API_URL` overrides the provider (useful for tests and
    /// air-gapped deployments); the default is ip-api.com.
    pub fn from_env() -> Result<Self, GeoConfigError> {
        let raw = std::env::var("GEO_API_URL").unwrap_or_else(|_| DEFAULT_GEO_API_URL.to_string());
        let base_url =
            Url::parse(&raw).map_err(|e| GeoConfigError::InvalidUrl(raw, e.to_string()))?;
        Self::new(base_url).map_err(GeoConfigError::Client)
    }

    /// Resolve the country name for an IP address.
    ///
    /// Loopback and unresolvable addresses short-circuit without a
    /// network call.
    pub async fn lookup_country(&self, ip: &str) -> String {
        if ip.is_empty() || ip == "unknown" || ip == "127.0.0.1" || ip == "::1" {
            return "Unknown".to_string();
        }

        let url = format!("{}json/{ip}?fields=country", self.base_url);
        let response = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(ip, error = %e, "geo lookup request failed");
                return "Unknown".to_string();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(ip, status = %response.status(), "geo lookup returned non-success");
            return "Unknown".to_string();
        }

        match response.json::<GeoResponse>().await {
            Ok(GeoResponse {
                country: Some(country),
            }) if !country.is_empty() => country,
            Ok(_) => "Unknown".to_string(),
            Err(e) => {
                tracing::warn!(ip, error = %e, "geo lookup body could not be parsed");
                "Unknown".to_string()
            }
        }
    }
}

/// Errors building the geo client from the environment.
#[derive(Debug, thiserror::Error)]
pub enum GeoConfigError {
    /// `GEO_API_URL` was set to an unparseable URL.
    #[error("invalid GEO_API_URL \"{0}\": {1}")]
    InvalidUrl(String, String),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build geo HTTP client: {0}")]
    Client(reqwest::Error),
}
